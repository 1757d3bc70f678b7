//! Rill CLI.

use rillc::commands::{lex_file, parse_lex_options, LexOptions};
use rillc::init_tracing;

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
            if args.len() < 3 {
                eprintln!("Usage: rill lex <file.rill> [--on-unknown=drop|error]");
                std::process::exit(1);
            }
            let options = parse_options_or_exit(&args[3..]);
            lex_file(&args[2], &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Rill {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, lex it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("rill"))
            {
                let options = parse_options_or_exit(&args[2..]);
                lex_file(command, &options);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn parse_options_or_exit(args: &[String]) -> LexOptions {
    match parse_lex_options(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Rill lexer");
    println!();
    println!("Usage: rill <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.rill>      Tokenize a file and print the token list");
    println!("  <file.rill>          Same as `lex <file.rill>`");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --on-unknown=drop    Skip lexemes that are not keywords, integers, or identifiers (default)");
    println!("  --on-unknown=error   Emit them as ERROR tokens instead");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=rill_lexer=trace");
    println!();
    println!("Examples:");
    println!("  rill lex main.rill");
    println!("  rill main.rill --on-unknown=error");
}
