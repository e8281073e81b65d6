//! CLI error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a `cplex` command.
///
/// Unmatched characters are not errors; `check` reports them through its
/// exit code instead.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Usage { message: String },

    #[error("unknown command '{command}'")]
    UnknownCommand { command: String },

    #[error("unknown output format '{format}' (expected raw, spans or classes)")]
    UnknownFormat { format: String },

    #[error("{}", describe_read_error(path, source))]
    Read { path: PathBuf, source: io::Error },

    #[error("no lexer for '{}': file name must match {patterns}", path.display())]
    NoLexer { path: PathBuf, patterns: String },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    pub(crate) fn usage(message: impl Into<String>) -> Self {
        CliError::Usage {
            message: message.into(),
        }
    }

    /// Usage problems exit with 2, everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage { .. }
            | CliError::UnknownCommand { .. }
            | CliError::UnknownFormat { .. } => 2,
            CliError::Read { .. } | CliError::NoLexer { .. } | CliError::Output(_) => 1,
        }
    }

    /// Whether printing the usage text would help.
    pub fn is_usage(&self) -> bool {
        self.exit_code() == 2
    }
}

fn describe_read_error(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}
