use clap::ValueEnum;

include!("src/cli.rs");

fn main() -> Result<(), std::io::Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    if std::env::var("DOCS_RS").is_ok() {
        return Ok(());
    }
    let outdir = match std::env::var_os("CARGO_MANIFEST_DIR") {
        Some(root) => std::path::Path::new(&root).join("completions"),
        None => return Ok(())
    };
    std::fs::create_dir_all(&outdir)?;
    let mut cmd = build_cli();
    for &shell in clap_complete::Shell::value_variants() {
        clap_complete::generate_to(shell, &mut cmd, "dragonkit", &outdir)?;
    }
    Ok(())
}
