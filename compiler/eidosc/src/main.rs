//! Eidos CLI
//!
//! Lex and cast spells from the command line.

use eidos_eval::Outcome;
use eidosc::commands::{cast_spell, lex_spell, list_words};
use eidosc::diagnostic::emit_lex_error;
use eidosc::{init_tracing, parse_cast_options, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let mut stdout = std::io::stdout().lock();

    match command.as_str() {
        "words" => {
            if let Err(e) = list_words(&mut stdout) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: eidos lex <spell>");
                std::process::exit(1);
            }
            if let Err(e) = lex_spell(&args[2], &mut stdout) {
                report(&args[2], &e);
                std::process::exit(1);
            }
        }
        "cast" => {
            if args.len() < 3 {
                eprintln!("Usage: eidos cast <spell> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --set <Field>=<value>   Seed a field (scalar or x,y,z)");
                eprintln!("  --max-stack <n>         Operand stack depth limit (default 64)");
                eprintln!("  --max-vars <n>          Variable slot limit (default 16)");
                std::process::exit(1);
            }
            let spell = &args[2];
            let result = parse_cast_options(&args[3..])
                .and_then(|options| cast_spell(spell, &options, &mut stdout));
            match result {
                Ok(execution) => {
                    if matches!(execution.outcome, Outcome::Failed { .. }) {
                        std::process::exit(2);
                    }
                }
                Err(e) => {
                    report(spell, &e);
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Eidos {}", env!("CARGO_PKG_VERSION"));
            println!(
                "Old Language v{}, field catalog v{}",
                eidos_lexer::LANGUAGE_VERSION,
                eidos_ir::CATALOG_VERSION
            );
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn report(spell: &str, error: &CliError) {
    match error {
        CliError::Lex(lex) => {
            if emit_lex_error(spell, lex).is_err() {
                eprintln!("error: {lex}");
            }
        }
        other => eprintln!("error: {other}"),
    }
}

fn print_usage() {
    println!("Eidos spell interpreter");
    println!();
    println!("Usage: eidos <command> [options]");
    println!();
    println!("Commands:");
    println!("  words                List every word of the Old Language");
    println!("  lex <spell>          Split a spell into words");
    println!("  cast <spell>         Cast a spell into an empty world");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Cast options:");
    println!("  --set <Field>=<value>   Seed a field (scalar or x,y,z)");
    println!("  --max-stack <n>         Operand stack depth limit (default 64)");
    println!("  --max-vars <n>          Variable slot limit (default 16)");
    println!();
    println!("Logging:");
    println!("  EIDOS_LOG=debug      Trace execution (falls back to RUST_LOG)");
    println!();
    println!("Examples:");
    println!("  eidos lex \"ta pa\"");
    println!("  eidos cast \"RU PE VU\" --set Gravity=0,-9.8,0");
    println!("  eidos cast \"KE TI NI VA\" --max-stack 4");
}
