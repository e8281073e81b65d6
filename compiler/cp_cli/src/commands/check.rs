//! `check`: report characters no lexical rule accepts.

use std::io::Write;

use cp_lexer::{tokenize, Category};
use tracing::info;

use super::{read_source, select_lexer, FileOptions};
use crate::CliError;

/// One unmatched character with its 1-based position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmatchedChar {
    pub offset: usize,
    pub line: usize,
    /// Counted in chars, not bytes.
    pub column: usize,
    pub ch: char,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub tokens: usize,
    pub unmatched: Vec<UnmatchedChar>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.unmatched.is_empty()
    }
}

/// Tokenize `source` and collect every unmatched character.
pub fn check_source(source: &str) -> CheckReport {
    let mut report = CheckReport::default();
    let mut line = 1;
    let mut line_start = 0;

    for tok in tokenize(source) {
        report.tokens += 1;

        if tok.category == Category::Unmatched {
            if let Some(ch) = tok.lexeme.chars().next() {
                report.unmatched.push(UnmatchedChar {
                    offset: tok.start,
                    line,
                    column: source[line_start..tok.start].chars().count() + 1,
                    ch,
                });
            }
        }

        // Whitespace, comments and strings may all span lines.
        for (i, byte) in tok.lexeme.bytes().enumerate() {
            if byte == b'\n' {
                line += 1;
                line_start = tok.start + i + 1;
            }
        }
    }

    report
}

/// Check the file named in `options`, writing one diagnostic line per
/// unmatched character (or a summary line when there are none).
pub fn check_file(options: &FileOptions, out: &mut impl Write) -> Result<CheckReport, CliError> {
    select_lexer(&options.path, options.force)?;
    let source = read_source(&options.path)?;
    let report = check_source(&source);
    let path = options.path.display();

    if report.is_clean() {
        writeln!(out, "{path}: ok ({} tokens)", report.tokens)?;
    } else {
        for u in &report.unmatched {
            writeln!(
                out,
                "{path}:{}:{}: unexpected character {:?}",
                u.line, u.column, u.ch
            )?;
        }
    }

    info!(
        path = %path,
        tokens = report.tokens,
        unmatched = report.unmatched.len(),
        "checked file"
    );
    Ok(report)
}
