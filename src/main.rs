mod cli;

use std::{path::Path, process};

use clap::Parser;
use formula::{tokenize, ErrorKind, Evaluator, Value};
use serde::Serialize;

use cli::{Cli, Command, OutputFormat};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let evaluator = Evaluator::new().with_max_depth(cli.max_depth);

    let ok = match cli.command {
        Command::Eval { formula, context } => {
            let ctx = match load_context(context.as_deref()) {
                Ok(ctx) => ctx,
                Err(why) => {
                    eprintln!("{why}");
                    process::exit(2);
                }
            };
            match evaluator.evaluate(&formula, &ctx) {
                Ok(value) => {
                    match cli.format {
                        OutputFormat::Json => print_json(&serde_json::json!({ "value": value })),
                        OutputFormat::Text => println!("{value}"),
                    }
                    true
                }
                Err(why) => report_error(cli.format, &why),
            }
        }
        Command::Validate { formula } => {
            let validation = evaluator.validate(&formula);
            match cli.format {
                OutputFormat::Json => print_json(&validation),
                OutputFormat::Text => match validation.error() {
                    None => println!("valid"),
                    Some(why) => println!("invalid: [{}] {why}", why.code()),
                },
            }
            validation.is_valid()
        }
        Command::Tokens { formula } => match tokenize(&formula) {
            Ok(tokens) => {
                match cli.format {
                    OutputFormat::Json => print_json(&tokens),
                    OutputFormat::Text => tokens
                        .iter()
                        .for_each(|token| println!("{:<10}{token}", token.kind())),
                }
                true
            }
            Err(why) => report_error(cli.format, &why),
        },
        Command::Ast { formula } => match evaluator.parse(&formula) {
            Ok(ast) => {
                match cli.format {
                    OutputFormat::Json => print_json(&ast),
                    OutputFormat::Text => println!("{ast}"),
                }
                true
            }
            Err(why) => report_error(cli.format, &why),
        },
    };

    if !ok {
        process::exit(1);
    }
}

fn load_context(path: Option<&Path>) -> Result<Value, String> {
    let Some(path) = path else {
        return Ok(Value::default());
    };

    let src = std::fs::read_to_string(path)
        .map_err(|why| format!("Failed to read context {path:?}: {why}"))?;
    serde_json::from_str(&src).map_err(|why| format!("Invalid context {path:?}: {why}"))
}

fn report_error(format: OutputFormat, why: &ErrorKind) -> bool {
    match format {
        OutputFormat::Text => eprintln!("[{}] {why}", why.code()),
        OutputFormat::Json => print_json(&serde_json::json!({
            "code": why.code(),
            "error": why.to_string(),
        })),
    }
    false
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(why) => eprintln!("Failed to serialize output: {why}"),
    }
}
