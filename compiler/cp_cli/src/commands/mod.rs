//! Command handlers for the `cplex` CLI.
//!
//! Each submodule implements one command. Shared pieces (argument parsing
//! for file commands, source decoding, lexer selection) live here.

use std::fs;
use std::path::{Path, PathBuf};

use cp_lexer::{LexerInfo, COMPONENT_PASCAL};
use tracing::debug;

use crate::CliError;

mod check;
mod info;
mod lex;

pub use check::{check_file, check_source, CheckReport, UnmatchedChar};
pub use info::write_info;
pub use lex::{lex_file, write_tokens, OutputFormat};

/// Options shared by commands that take a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOptions {
    pub path: PathBuf,
    pub format: OutputFormat,
    /// Skip the filename check.
    pub force: bool,
}

/// Parse `<file> [--format=<fmt>] [--force]`.
///
/// `--format` is only accepted when `allow_format` is set.
pub fn parse_file_options(
    command: &str,
    args: &[String],
    allow_format: bool,
) -> Result<FileOptions, CliError> {
    let mut path = None;
    let mut format = OutputFormat::default();
    let mut force = false;

    for arg in args {
        if arg == "--force" || arg == "-f" {
            force = true;
        } else if let Some(value) = arg.strip_prefix("--format=") {
            if !allow_format {
                return Err(CliError::usage(format!(
                    "'{command}' does not take --format"
                )));
            }
            format = value.parse()?;
        } else if arg.starts_with('-') {
            return Err(CliError::usage(format!("unknown option '{arg}'")));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::usage(format!("unexpected argument '{arg}'")));
        }
    }

    let Some(path) = path else {
        return Err(CliError::usage(format!("missing file path for '{command}'")));
    };
    Ok(FileOptions {
        path,
        format,
        force,
    })
}

/// How the bytes of a source file were turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    /// Fallback for input that is not valid UTF-8: one char per byte.
    Latin1,
}

/// Decode raw file contents.
///
/// UTF-8 is tried first (a leading byte-order mark is dropped); anything
/// else is read as Latin-1 so every byte sequence yields text.
pub fn decode_source(bytes: Vec<u8>) -> (String, Encoding) {
    match String::from_utf8(bytes) {
        Ok(text) => {
            let text = match text.strip_prefix('\u{feff}') {
                Some(rest) => rest.to_owned(),
                None => text,
            };
            (text, Encoding::Utf8)
        }
        Err(err) => {
            let text = err.into_bytes().into_iter().map(char::from).collect();
            (text, Encoding::Latin1)
        }
    }
}

/// Read and decode a source file.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let len = bytes.len();
    let (text, encoding) = decode_source(bytes);
    debug!(path = %path.display(), bytes = len, ?encoding, "read source file");
    Ok(text)
}

/// Pick the lexer for `path` from its registration metadata.
pub fn select_lexer(path: &Path, force: bool) -> Result<&'static LexerInfo, CliError> {
    if force || COMPONENT_PASCAL.matches_filename(path) {
        debug!(path = %path.display(), force, lexer = COMPONENT_PASCAL.name, "selected lexer");
        return Ok(&COMPONENT_PASCAL);
    }
    Err(CliError::NoLexer {
        path: path.to_path_buf(),
        patterns: COMPONENT_PASCAL.filenames.join(", "),
    })
}
