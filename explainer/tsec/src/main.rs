//! TypeScript Error Explainer CLI
//!
//! Turns terse compiler diagnostics into titled explanations with
//! example-code fixes, as text, HTML, or JSON.

use tsec::commands::{explain_at, explain_code, list_codes};

fn main() {
    tsec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: tse explain <code> [message] [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --format=<fmt>   Output format: text, html, json (default: text)");
                eprintln!("  -o <path>        Write the document to a file");
                eprintln!("  --color=<mode>   Terminal colors: auto, always, never");
                std::process::exit(1);
            }
            explain_code(&args[2], &args[3..]);
        }
        "at" => {
            if args.len() < 4 {
                eprintln!("Usage: tse at <log-file> <line>:<col> [options]");
                eprintln!();
                eprintln!("Explains the first diagnostic a saved tsc log reports at the");
                eprintln!("given position. Accepts the same options as `tse explain`.");
                eprintln!();
                eprintln!("Example: tse at build.log 12:5");
                std::process::exit(1);
            }
            explain_at(&args[2], &args[3], &args[4..]);
        }
        "list" => {
            list_codes();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("tse {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare numeric or TSnnnn argument reads as an explain request
            if tse_diagnostic::parse_code(command).is_some() {
                explain_code(command, &args[2..]);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("TypeScript Error Explainer");
    println!();
    println!("Usage: tse <command> [options]");
    println!();
    println!("Commands:");
    println!("  explain <code> [message]    Explain an error code, e.g. TS2304");
    println!("  at <log-file> <line>:<col>  Explain the error at a position in a tsc log");
    println!("  list                        List supported error codes");
    println!("  help                        Show this help message");
    println!("  version                     Show version information");
    println!();
    println!("Options (explain, at):");
    println!("  --format=<fmt>   Output format: text, html, json (default: text)");
    println!("  -o <path>        Write the document to a file instead of stdout");
    println!("  --color=<mode>   Terminal colors: auto, always, never (default: auto)");
    println!();
    println!("Examples:");
    println!("  tse explain TS2304 \"Cannot find name 'foo'.\"");
    println!("  tse explain 2322 --format=html -o explanation.html");
    println!("  tse at build.log 12:5");
}
