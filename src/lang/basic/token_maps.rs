//! Token tables for the Color BASIC family.
//! Single byte tokens are in 0x80..0xFF, function tokens are stored with
//! a 0xFF prefix and appear here as 0xFF80..0xFFFF.

/// Dragon 32 BASIC
pub const DRAGON32: [(u16,&str);112] = [
    (0x80,"FOR"),
    (0x81,"GO"),
    (0x82,"REM"),
    (0x83,"'"),
    (0x84,"ELSE"),
    (0x85,"IF"),
    (0x86,"DATA"),
    (0x87,"PRINT"),
    (0x88,"ON"),
    (0x89,"INPUT"),
    (0x8a,"END"),
    (0x8b,"NEXT"),
    (0x8c,"DIM"),
    (0x8d,"READ"),
    (0x8e,"LET"),
    (0x8f,"RUN"),
    (0x90,"RESTORE"),
    (0x91,"RETURN"),
    (0x92,"STOP"),
    (0x93,"POKE"),
    (0x94,"CONT"),
    (0x95,"LIST"),
    (0x96,"CLEAR"),
    (0x97,"NEW"),
    (0x98,"DEF"),
    (0x99,"CLOAD"),
    (0x9a,"CSAVE"),
    (0x9b,"OPEN"),
    (0x9c,"CLOSE"),
    (0x9d,"LLIST"),
    (0x9e,"SET"),
    (0x9f,"RESET"),
    (0xa0,"CLS"),
    (0xa1,"MOTOR"),
    (0xa2,"SOUND"),
    (0xa3,"AUDIO"),
    (0xa4,"EXEC"),
    (0xa5,"SKIPF"),
    (0xa6,"DEL"),
    (0xa7,"EDIT"),
    (0xa8,"TRON"),
    (0xa9,"TROFF"),
    (0xaa,"LINE"),
    (0xab,"PCLS"),
    (0xac,"PSET"),
    (0xad,"PRESET"),
    (0xae,"SCREEN"),
    (0xaf,"PCLEAR"),
    (0xb0,"COLOR"),
    (0xb1,"CIRCLE"),
    (0xb2,"PAINT"),
    (0xb3,"GET"),
    (0xb4,"PUT"),
    (0xb5,"DRAW"),
    (0xb6,"PCOPY"),
    (0xb7,"PMODE"),
    (0xb8,"PLAY"),
    (0xb9,"DLOAD"),
    (0xba,"RENUM"),
    (0xbb,"TAB("),
    (0xbc,"TO"),
    (0xbd,"SUB"),
    (0xbe,"FN"),
    (0xbf,"THEN"),
    (0xc0,"NOT"),
    (0xc1,"STEP"),
    (0xc2,"OFF"),
    (0xc3,"+"),
    (0xc4,"-"),
    (0xc5,"*"),
    (0xc6,"/"),
    (0xc7,"^"),
    (0xc8,"AND"),
    (0xc9,"OR"),
    (0xca,">"),
    (0xcb,"="),
    (0xcc,"<"),
    (0xcd,"USING"),
    (0xff80,"SGN"),
    (0xff81,"INT"),
    (0xff82,"ABS"),
    (0xff83,"POS"),
    (0xff84,"RND"),
    (0xff85,"SQR"),
    (0xff86,"LOG"),
    (0xff87,"EXP"),
    (0xff88,"SIN"),
    (0xff89,"COS"),
    (0xff8a,"TAN"),
    (0xff8b,"ATN"),
    (0xff8c,"PEEK"),
    (0xff8d,"LEN"),
    (0xff8e,"STR$"),
    (0xff8f,"VAL"),
    (0xff90,"ASC"),
    (0xff91,"CHR$"),
    (0xff92,"EOF"),
    (0xff93,"JOYSTK"),
    (0xff94,"FIX"),
    (0xff95,"HEX$"),
    (0xff96,"LEFT$"),
    (0xff97,"RIGHT$"),
    (0xff98,"MID$"),
    (0xff99,"POINT"),
    (0xff9a,"INKEY$"),
    (0xff9b,"MEM"),
    (0xff9c,"VARPTR"),
    (0xff9d,"INSTR"),
    (0xff9e,"TIMER"),
    (0xff9f,"PPOINT"),
    (0xffa0,"STRING$"),
    (0xffa1,"USR")
];

/// Color BASIC 1.3
pub const COCO_COLOR: [(u16,&str);73] = [
    (0x80,"FOR"),
    (0x81,"GO"),
    (0x82,"REM"),
    (0x83,"'"),
    (0x84,"ELSE"),
    (0x85,"IF"),
    (0x86,"DATA"),
    (0x87,"PRINT"),
    (0x88,"ON"),
    (0x89,"INPUT"),
    (0x8a,"END"),
    (0x8b,"NEXT"),
    (0x8c,"DIM"),
    (0x8d,"READ"),
    (0x8e,"RUN"),
    (0x8f,"RESTORE"),
    (0x90,"RETURN"),
    (0x91,"STOP"),
    (0x92,"POKE"),
    (0x93,"CONT"),
    (0x94,"LIST"),
    (0x95,"CLEAR"),
    (0x96,"NEW"),
    (0x97,"CLOAD"),
    (0x98,"CSAVE"),
    (0x99,"OPEN"),
    (0x9a,"CLOSE"),
    (0x9b,"LLIST"),
    (0x9c,"SET"),
    (0x9d,"RESET"),
    (0x9e,"CLS"),
    (0x9f,"MOTOR"),
    (0xa0,"SOUND"),
    (0xa1,"AUDIO"),
    (0xa2,"EXEC"),
    (0xa3,"SKIPF"),
    (0xa4,"TAB("),
    (0xa5,"TO"),
    (0xa6,"SUB"),
    (0xa7,"THEN"),
    (0xa8,"NOT"),
    (0xa9,"STEP"),
    (0xaa,"OFF"),
    (0xab,"+"),
    (0xac,"-"),
    (0xad,"*"),
    (0xae,"/"),
    (0xaf,"^"),
    (0xb0,"AND"),
    (0xb1,"OR"),
    (0xb2,">"),
    (0xb3,"="),
    (0xb4,"<"),
    (0xff80,"SGN"),
    (0xff81,"INT"),
    (0xff82,"ABS"),
    (0xff83,"USR"),
    (0xff84,"RND"),
    (0xff85,"SIN"),
    (0xff86,"PEEK"),
    (0xff87,"LEN"),
    (0xff88,"STR$"),
    (0xff89,"VAL"),
    (0xff8a,"ASC"),
    (0xff8b,"CHR$"),
    (0xff8c,"EOF"),
    (0xff8d,"JOYSTK"),
    (0xff8e,"LEFT$"),
    (0xff8f,"RIGHT$"),
    (0xff90,"MID$"),
    (0xff91,"POINT"),
    (0xff92,"INKEY$"),
    (0xff93,"MEM")
];

/// Additional tokens of Extended Color BASIC 1.1, these are added to `COCO_COLOR`
pub const COCO_EXTENDED: [(u16,&str);39] = [
    (0xb5,"DEL"),
    (0xb6,"EDIT"),
    (0xb7,"TRON"),
    (0xb8,"TROFF"),
    (0xb9,"DEF"),
    (0xba,"LET"),
    (0xbb,"LINE"),
    (0xbc,"PCLS"),
    (0xbd,"PSET"),
    (0xbe,"PRESET"),
    (0xbf,"SCREEN"),
    (0xc0,"PCLEAR"),
    (0xc1,"COLOR"),
    (0xc2,"CIRCLE"),
    (0xc3,"PAINT"),
    (0xc4,"GET"),
    (0xc5,"PUT"),
    (0xc6,"DRAW"),
    (0xc7,"PCOPY"),
    (0xc8,"PMODE"),
    (0xc9,"PLAY"),
    (0xca,"DLOAD"),
    (0xcb,"RENUM"),
    (0xcc,"FN"),
    (0xcd,"USING"),
    (0xff94,"ATN"),
    (0xff95,"COS"),
    (0xff96,"TAN"),
    (0xff97,"EXP"),
    (0xff98,"FIX"),
    (0xff99,"LOG"),
    (0xff9a,"POS"),
    (0xff9b,"SQR"),
    (0xff9c,"HEX$"),
    (0xff9d,"VARPTR"),
    (0xff9e,"INSTR"),
    (0xff9f,"TIMER"),
    (0xffa0,"PPOINT"),
    (0xffa1,"STRING$")
];
