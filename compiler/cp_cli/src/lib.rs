//! `cplex`: command-line host for the Component Pascal lexer.
//!
//! The binary is a thin wrapper around [`run`]; every command writes to a
//! caller-supplied `Write` so it can be driven from tests.

pub mod commands;
mod error;

use std::io::Write;
use std::sync::Once;

use cp_lexer::COMPONENT_PASCAL;

pub use error::CliError;

/// Usage text printed by `help` and on usage errors.
pub const USAGE: &str = "\
Usage: cplex <command> [args]

Commands:
  lex <file> [--format=raw|spans|classes] [--force]
                 Print every token of a Component Pascal file
  check <file> [--force]
                 Report characters no lexical rule accepts (exit 1 if any)
  info           Show lexer registration metadata and rule groups
  help           Show this message

Options:
  --force, -f    Lex the file even if its name does not match *.cp / *.cps

Environment:
  RUST_LOG         Enable logging, e.g. RUST_LOG=cp_cli=debug,cp_lexer_core=trace
  CPLEX_LOG_TREE   Set to 1 for hierarchical log output";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var("CPLEX_LOG_TREE").is_ok_and(|v| v == "1");

        if tree {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Run one `cplex` invocation. `args` excludes the program name.
///
/// Returns the process exit code on success; `check` yields 1 when it found
/// unmatched characters.
pub fn run(args: &[String], out: &mut impl Write) -> Result<i32, CliError> {
    let Some((command, rest)) = args.split_first() else {
        writeln!(out, "{USAGE}")?;
        return Ok(0);
    };

    match command.as_str() {
        "lex" => {
            let options = commands::parse_file_options("lex", rest, true)?;
            commands::lex_file(&options, out)?;
            Ok(0)
        }
        "check" => {
            let options = commands::parse_file_options("check", rest, false)?;
            let report = commands::check_file(&options, out)?;
            Ok(i32::from(!report.is_clean()))
        }
        "info" => {
            if let Some(extra) = rest.first() {
                return Err(CliError::usage(format!("unexpected argument '{extra}'")));
            }
            commands::write_info(&COMPONENT_PASCAL, out)?;
            Ok(0)
        }
        "help" | "--help" | "-h" => {
            writeln!(out, "{USAGE}")?;
            Ok(0)
        }
        other => Err(CliError::UnknownCommand {
            command: other.to_owned(),
        }),
    }
}
