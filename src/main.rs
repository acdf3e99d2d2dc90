//! Token dump tool.
//!
//! Reads a source file, lexes it and prints one token per line. Lexical
//! errors are reported with a caret diagnostic.

use std::{fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use clap::Parser;
use cslex::{display_error, Lexer, TokenKind};
use log::{debug, error, LevelFilter};

#[derive(Parser, Debug)]
#[command(name = "cslex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump the tokens of a source file", long_about = None)]
struct Cli {
    /// Source file to lex
    file: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, env = "CSLEX_VERBOSE")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let file_name = cli.file.to_string_lossy().to_string();
    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!("failed to read {}: {}", file_name, err);
            exit(1);
        }
    };

    let start = Instant::now();

    let mut lexer = match Lexer::new(&source) {
        Ok(lexer) => lexer,
        Err(err) => {
            display_error(&err, &source, &file_name);
            exit(1);
        }
    };

    let mut count = 0;
    loop {
        match lexer.next_token() {
            Ok(token) => {
                println!("{}", token);
                if token.kind == TokenKind::EOF {
                    break;
                }
                count += 1;
            }
            Err(err) => {
                display_error(&err, &source, &file_name);
                exit(1);
            }
        }
    }

    debug!("Tokenized {} tokens in {:?}", count, start.elapsed());
}
