//! KDL lexer CLI
//!
//! Developer tool for inspecting the token stream of a KDL document.

mod commands;

use commands::{init_tracing, lex_file, LexOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut options = LexOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if arg == "--no-trivia" {
                    options.show_trivia = false;
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: kdlc lex <file.kdl> [--no-trivia]");
                std::process::exit(1);
            };

            if !lex_file(path, &options) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("kdlc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("KDL lexer");
    println!();
    println!("Usage: kdlc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.kdl>       Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --no-trivia          Hide whitespace and newline tokens");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=kdl_lexer=trace) to trace the scanner.");
}
