//! `info`: print the lexer's registration metadata and rule table shape.

use std::io::{self, Write};

use cp_lexer::{rules, LexerInfo, PERVASIVE_NAMES, RESERVED_WORDS};

pub fn write_info(lexer: &LexerInfo, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "name:            {}", lexer.name)?;
    writeln!(out, "aliases:         {}", lexer.aliases.join(", "))?;
    writeln!(out, "filenames:       {}", lexer.filenames.join(", "))?;
    writeln!(out, "mime types:      {}", lexer.mime_types.join(", "))?;
    writeln!(out, "reserved words:  {}", RESERVED_WORDS.len())?;
    writeln!(out, "pervasive names: {}", PERVASIVE_NAMES.len())?;

    writeln!(out, "rule groups:")?;
    for group in rules::ROOT {
        let names: Vec<&str> = group.rules.iter().map(|r| r.name).collect();
        writeln!(out, "  {:<12} {}", group.kind.name(), names.join(", "))?;
    }
    Ok(())
}
