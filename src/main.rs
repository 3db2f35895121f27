use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead},
    process,
    time::Instant,
};

use lang_frontend::{
    config::Config,
    display_error,
    evaluator::evaluator::Eval,
    lexer::{lexer::tokenize_with, tokens::Token},
    parser::parser::parse,
};
use log::{debug, info};

fn main() {
    env_logger::init();

    let start = Instant::now();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {}", error);
            print_usage();
            process::exit(2);
        }
    };

    debug!("{:?}", config);

    let succeeded = if config.repl {
        run_repl(&config);
        true
    } else {
        run_file(&config)
    };

    println!("\nDone in {:?}", start.elapsed());

    if !succeeded {
        process::exit(1);
    }
}

fn print_usage() {
    println!("USAGE:");
    println!("    lang_frontend --file <path> [--lex] [--parse] [--eval] [--verbose]");
    println!("    lang_frontend --repl [--lex] [--parse] [--eval] [--verbose]");
    println!();
    println!("OPTIONS:");
    println!("    --file <path>   Path to file with code");
    println!("    --lex           Print tokenizer output");
    println!("    --parse         Print parser output");
    println!("    --eval          Print the value of the program");
    println!("    --repl          Read lines from stdin, ignores --file");
    println!("    --verbose       Trace every tokenizer step (with RUST_LOG=trace)");
}

/// Runs every requested phase on the configured file.
///
/// Returns false when the file could not be read or did not parse.
fn run_file(config: &Config) -> bool {
    let Some(path) = &config.file else {
        return false;
    };

    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error when reading file {}: {}", path.display(), error);
            return false;
        }
    };

    info!("read {} bytes from {}", source.len(), path.display());

    run_source(config, &source, config.file_name(), true)
}

fn run_repl(config: &Config) {
    println!("Running repl...");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };

        run_source(config, &line, None, false);
    }

    println!("Closing repl");
}

fn run_source(config: &Config, source: &str, file: Option<String>, timed: bool) -> bool {
    let lex_start = Instant::now();
    let tokens = tokenize_with(source, file, config.lexer_config());

    if timed {
        println!("Tokenized in {:?}", lex_start.elapsed());
    }

    if config.lex {
        println!("{}", format_tokens(&tokens));
    }

    if !config.parse && !config.eval {
        return true;
    }

    let parse_start = Instant::now();
    let program = parse(&tokens);

    if timed {
        println!("Parsed in {:?}", parse_start.elapsed());
    }

    if program.has_errors() {
        for error in &program.errors {
            display_error(error, source);
        }
        return false;
    }

    if config.parse {
        println!("{}", program);
    }

    if config.eval {
        let eval_start = Instant::now();

        match program.eval() {
            Ok(object) => println!("{}", object.inspect()),
            Err(error) => println!("Error: {} ({})", error.get_error_name(), error.get_error()),
        }

        if timed {
            println!("Evaluated in {:?}", eval_start.elapsed());
        }
    }

    true
}

fn format_tokens(tokens: &[Token]) -> String {
    let tokens = tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!("[{}]", tokens)
}
