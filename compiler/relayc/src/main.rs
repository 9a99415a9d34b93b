//! Relay CLI
//!
//! Runs behaviour scripts from disk.

use relayc::commands::{lex_file, parse_run_args, run_file};
use relayc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            let run = match parse_run_args(&args[2..]) {
                Ok(run) => run,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: relay run <file> [--max-iterations=N] [--set name=literal]...");
                    std::process::exit(1);
                }
            };
            run_file(&run.path, &run.options);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: relay lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Relay - behaviour script runner");
    println!();
    println!("Usage: relay <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>    Execute a script");
    println!("  lex <file>    Print the script's tokens");
    println!("  help          Show this message");
    println!();
    println!("Run options:");
    println!("  --max-iterations=N     Fail any loop running more than N iterations");
    println!("  --set name=literal     Define a variable before the script starts");
    println!();
    println!("Scripts can call print(args...) and sleep(ms).");
    println!("Set RUST_LOG=relay_eval=debug to trace host calls and loops.");
}
