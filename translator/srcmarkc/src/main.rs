//! srcmark CLI
//!
//! Dumps raw and normalized token streams for indentation-sensitive
//! sources.

use srcmark_ir::{IndentPolicy, LanguageProfile};
use srcmarkc::commands::{check_file, normalized_tokens, raw_tokens};
use srcmarkc::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    // every subcommand takes one file plus optional flags
    let mut path: Option<&str> = None;
    let mut strict_indent = false;
    for arg in &args[2..] {
        if arg == "--strict-indent" {
            strict_indent = true;
        } else if !arg.starts_with('-') && path.is_none() {
            path = Some(arg);
        } else {
            eprintln!("error: unrecognized argument '{arg}'");
            std::process::exit(1);
        }
    }

    let mut profile = LanguageProfile::python();
    if strict_indent {
        profile = profile.with_indent_policy(IndentPolicy::Strict);
    }

    match command.as_str() {
        "raw" => {
            let Some(path) = path else {
                eprintln!("Usage: srcmark raw <file>");
                std::process::exit(1);
            };
            exit_on_error(raw_tokens(path));
        }
        "tokens" => {
            let Some(path) = path else {
                eprintln!("Usage: srcmark tokens <file> [--strict-indent]");
                std::process::exit(1);
            };
            exit_on_error(normalized_tokens(path, profile));
        }
        "check" => {
            let Some(path) = path else {
                eprintln!("Usage: srcmark check <file> [--strict-indent]");
                std::process::exit(1);
            };
            let violations = exit_on_error(check_file(path, profile));
            if violations > 0 {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_on_error<T>(result: Result<T, CliError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("srcmark - token-stream normalizer for indentation-sensitive sources");
    eprintln!();
    eprintln!("Usage: srcmark <command> <file> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  raw <file>       Dump the raw lexer token stream");
    eprintln!("  tokens <file>    Dump the normalized token stream");
    eprintln!("  check <file>     Verify structural guarantees on the normalized stream");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict-indent  Round misaligned indentation down instead of up");
    eprintln!();
    eprintln!("Set RUST_LOG=srcmark_normalize=trace to see synthesis decisions.");
}
