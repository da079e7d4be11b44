use std::io;

use clap::Parser;
use linecalc::{eval_line, session::Session};

/// linecalc is an interactive calculator for integer arithmetic expressions
/// with `+`, `-`, `*`, `/` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting an
    /// interactive session.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.expression {
        Some(expression) => match eval_line(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        },
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();

            if let Err(e) = Session::new(stdin.lock(), stdout.lock()).run() {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
    }
}
