//! Chatter CLI
//!
//! Runs natural-language Chatter scripts from the terminal.

use chatterc::commands::{check_file, lex_file, parse_run_args, run_file};
use chatterc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => match parse_run_args(&args[2..]) {
            Ok(run_args) => run_file(&run_args),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: chatter run <file> [options]");
                eprintln!();
                print_run_options();
                std::process::exit(1);
            }
        },
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: chatter lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: chatter check <file>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("chatter {}", env!("CARGO_PKG_VERSION"));
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
    println!("Chatter (a scripting language that reads like English)");
    println!();
    println!("Usage: chatter <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>      Run a script ('-' reads it from stdin)");
    println!("  lex <file>      Show each statement with its line and kind");
    println!("  check <file>    Report lines the interpreter will not understand");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Run options:");
    print_run_options();
    println!();
    println!("Set CHATTER_LOG (or RUST_LOG) to e.g. 'chatter_eval=debug' for tracing.");
}

fn print_run_options() {
    println!("  --interval=<secs>        Default time between repeated messages (default: 1)");
    println!("  --max-iterations=<n>     Largest loop allowed (default: 1000000)");
    println!("  --max-depth=<n>          Deepest function nesting allowed (default: 200)");
    println!("  --stop-after=<secs>      Stop repetitions after this long instead of on Enter");
}
