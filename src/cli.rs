use clap::{value_parser, crate_version, Arg, ArgAction, Command};

const ADDR_HELP: &str = "addresses can be decimal, or hex with a `$` or `0x` prefix";
const CONFIG_LONG_HELP: &str = "JSON object with any of the keys
`machine` (string), `programStart`, `loadAddress`, `execAddress` (integers).
Explicit options take precedence over the configuration.";

fn machine_arg() -> Arg {
    Arg::new("machine").short('m').long("machine").help("machine whose token table is used")
        .value_name("MACHINE")
        .value_parser(["dragon32","coco","cocoext"])
        .required(false)
}

fn addr_arg(help: &'static str) -> Arg {
    Arg::new("addr").short('a').long("addr").help(help)
        .value_name("ADDRESS")
        .required(false)
}

fn config_arg() -> Arg {
    Arg::new("config").long("config").short('c').value_name("JSON").help("settings as a JSON string")
        .long_help(CONFIG_LONG_HELP)
        .required(false)
}

fn console_arg() -> Arg {
    Arg::new("console").long("console").help("format for console unconditionally")
        .required(false)
        .action(ArgAction::SetTrue)
        .long_help("even if the output context is a file or pipe, format it for the console")
}

fn indent_arg() -> Arg {
    Arg::new("indent").long("indent").help("JSON indentation, omit to minify")
        .value_name("SPACES")
        .value_parser(value_parser!(u16).range(0..16))
        .required(false)
}

pub fn build_cli() -> Command {
    let long_help = "dragonkit is always invoked with exactly one of several subcommands.
The subcommands are generally designed to function as nodes in a pipeline.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
tokenize to file:      `dragonkit tokenize < prog.bas > prog.dump`
detokenize:            `dragonkit detokenize -a 0x1e01 < prog.dump`
renumber:              `dragonkit renumber < prog.bas > renumbered.bas`
Dragon DOS file:       `dragonkit pack -a 0x2601 -x 0x2601 < prog.bas > PROG.BAS`
unpack for CoCo:       `dragonkit unpack -m cocoext < PROG.BAS`
show container header: `dragonkit meta --indent 2 < PROG.BAS`";

    let mut main_cmd = Command::new("dragonkit")
        .about("Tokenize, detokenize, and renumber Dragon 32 and CoCo BASIC programs.")
        .after_long_help(long_help)
        .version(crate_version!());

    main_cmd = main_cmd.subcommand(
        Command::new("tokenize")
            .arg(machine_arg())
            .arg(addr_arg("address of the first line in memory"))
            .arg(config_arg())
            .arg(console_arg())
            .visible_alias("tok")
            .about("read listing from stdin, tokenize, write memory dump to stdout")
            .after_help(ADDR_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("detokenize")
            .arg(machine_arg())
            .arg(addr_arg("address the dump was loaded at"))
            .arg(config_arg())
            .visible_alias("dtok")
            .about("read memory dump from stdin, detokenize, write listing to stdout")
            .after_help(ADDR_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("inspect")
            .arg(machine_arg())
            .arg(addr_arg("address the dump was loaded at"))
            .arg(config_arg())
            .about("read memory dump from stdin, write annotated records to stdout")
            .after_help(ADDR_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("renumber")
            .about("read listing from stdin, renumber by 10s, write listing to stdout")
            .after_help("targets of GOTO, GOSUB, THEN, ELSE, and ON lists are updated,
targets that do not exist are left alone and reported"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("destinations")
            .about("read listing from stdin, write every jump target to stdout"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("reformat")
            .arg(machine_arg())
            .arg(config_arg())
            .about("read listing from stdin, normalize spacing, write listing to stdout"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("pack")
            .arg(machine_arg())
            .arg(addr_arg("load address, program is tokenized for this address"))
            .arg(Arg::new("exec").short('x').long("exec").help("exec address").value_name("ADDRESS").required(false))
            .arg(config_arg())
            .arg(console_arg())
            .about("read listing from stdin, write Dragon DOS binary file to stdout")
            .after_help(ADDR_HELP),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("unpack")
            .arg(machine_arg())
            .arg(config_arg())
            .about("read Dragon DOS binary file from stdin, write listing to stdout"),
    );
    main_cmd = main_cmd.subcommand(
        Command::new("meta")
            .arg(indent_arg())
            .about("read Dragon DOS binary file from stdin, write header and data as JSON"),
    );
    main_cmd
}
