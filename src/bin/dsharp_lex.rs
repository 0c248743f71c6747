//! Command-line driver for the D# tokenizer.
//!
//! Usage:
//!   dsharp-lex `<path>` [--format `<format>`] [--trace]
//!
//! Reads a D# source file (`-` for standard input), tokenizes it and prints
//! the token stream, one `KIND lexeme` line per token or a JSON array with
//! `--format json`. The core library never performs IO; reading the source
//! and printing the stream happens here.

use clap::{Arg, ArgAction, Command};
use dsharp_lex::lexer::{TracingSink, Tokenizer};
use std::io::Read;

fn main() {
    let matches = Command::new("dsharp-lex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize D# music notation source files")
        .arg(
            Arg::new("path")
                .help("Path to the D# source file, or - for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format ('plain' or 'json')")
                .default_value("plain"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .help("Log every consumed token (whitespace included) at debug level")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let trace = matches.get_flag("trace");

    if trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let source = read_source(path);
    let tokens = if trace {
        Tokenizer::new(source).tokenize_traced(&mut TracingSink)
    } else {
        Tokenizer::new(source).tokenize()
    };

    match format.as_str() {
        "plain" => {
            for token in &tokens {
                println!("{}", token);
            }
        }
        "json" => {
            let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Error serializing tokens: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Read the source text from a file path, or stdin when the path is `-`.
fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut source) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        source
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}
