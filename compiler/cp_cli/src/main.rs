//! Component Pascal lexer CLI.

use std::io::Write;

fn main() {
    cp_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match cp_cli::run(&args, &mut out) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_usage() {
                eprintln!();
                eprintln!("{}", cp_cli::USAGE);
            }
            err.exit_code()
        }
    };

    let _ = out.flush();
    std::process::exit(code);
}
