use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use plb::{errors::errors::Error, lexer::lexer::Lexer, lexer::tokens::TokenKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Dump the token stream of fixed-format PLB source files.
#[derive(Parser, Debug)]
#[command(name = "plb", version, about)]
struct Args {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Prefix every token with its line:column
    #[arg(short, long)]
    positions: bool,

    /// Hide whitespace, newline and blank-line tokens
    #[arg(long)]
    no_trivia: bool,

    /// Stop a file at its first diagnostic
    #[arg(long)]
    fail_fast: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut failed = false;

    for file in &args.files {
        match Lexer::from_path(file) {
            Ok(lexer) => failed |= !dump_tokens(lexer, &args),
            Err(error) => {
                display_error(&error);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Prints the tokens of one file. Returns false if any diagnostic was raised.
fn dump_tokens(mut lexer: Lexer, args: &Args) -> bool {
    let mut count = 0usize;

    loop {
        let (token, error) = lexer.next_token();

        if let Some(error) = error {
            display_error(&error);
            if args.fail_fast {
                break;
            }
        }

        if token.kind == TokenKind::EOF {
            break;
        }

        count += 1;
        if args.no_trivia && token.is_trivia() {
            continue;
        }

        if args.positions {
            println!("{:>4}:{:<3} {}", token.line(), token.column(), token);
        } else {
            println!("{}", token);
        }
    }

    info!(file = lexer.file(), tokens = count, errors = lexer.errors().len(), "tokenized");
    lexer.errors().is_empty()
}

fn display_error(error: &Error) {
    /*
        Error Lexer: invalid token
        Location: orders.plb 3:5
        1383!
            ^
    */
    eprintln!("{}", error);
    if let tip @ plb::ErrorTip::Suggestion(_) = error.get_tip() {
        eprintln!("help: {}", tip);
    }
}
