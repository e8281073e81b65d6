//! `lex`: print the token stream of a file.

use std::io::Write;
use std::str::FromStr;

use cp_lexer::tokenize;
use tracing::info;

use super::{read_source, select_lexer, FileOptions};
use crate::CliError;

/// Token listing format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<token type>\t<quoted lexeme>`, one token per line.
    #[default]
    Raw,
    /// `<start>..<end> <category> <quoted lexeme>`.
    Spans,
    /// Category label only.
    Classes,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(OutputFormat::Raw),
            "spans" => Ok(OutputFormat::Spans),
            "classes" => Ok(OutputFormat::Classes),
            other => Err(CliError::UnknownFormat {
                format: other.to_owned(),
            }),
        }
    }
}

/// Write every token of `source` in the given format. Returns the token count.
pub fn write_tokens(
    source: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> std::io::Result<usize> {
    let mut count = 0;
    for tok in tokenize(source) {
        match format {
            OutputFormat::Raw => writeln!(out, "{}\t{:?}", tok.category.token_type(), tok.lexeme)?,
            OutputFormat::Spans => writeln!(
                out,
                "{}..{} {} {:?}",
                tok.start,
                tok.end(),
                tok.category,
                tok.lexeme
            )?,
            OutputFormat::Classes => writeln!(out, "{}", tok.category)?,
        }
        count += 1;
    }
    Ok(count)
}

/// Lex the file named in `options` and write its tokens to `out`.
pub fn lex_file(options: &FileOptions, out: &mut impl Write) -> Result<usize, CliError> {
    let lexer = select_lexer(&options.path, options.force)?;
    let source = read_source(&options.path)?;
    let count = write_tokens(&source, options.format, out)?;
    info!(
        path = %options.path.display(),
        lexer = lexer.name,
        tokens = count,
        "lexed file"
    );
    Ok(count)
}
