#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specifies the output format
    #[arg(short, long, global = true)]
    #[clap(value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum nesting depth of function calls
    #[arg(long, global = true, default_value_t = formula::DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate a formula against a JSON context
    Eval {
        formula: String,

        /// JSON file holding the variables the formula refers to
        #[arg(short, long)]
        context: Option<std::path::PathBuf>,
    },

    /// Check that a formula parses and only calls known functions
    Validate { formula: String },

    /// Print the token stream of a formula
    Tokens { formula: String },

    /// Print the parsed syntax tree of a formula
    Ast { formula: String },
}

#[cfg(test)]
mod test {
    use super::{Cli, Command, OutputFormat};
    use clap::Parser;

    #[test]
    fn parse_eval_args() {
        let cli = Cli::try_parse_from([
            "formula",
            "eval",
            "Add(1, x)",
            "--context",
            "ctx.json",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.max_depth, formula::DEFAULT_MAX_DEPTH);
        match cli.command {
            Command::Eval { formula, context } => {
                assert_eq!(formula, "Add(1, x)");
                assert_eq!(context.unwrap().to_str(), Some("ctx.json"));
            }
            other => panic!("Expected eval command, found {other:?}"),
        }
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["formula", "validate", "Add(1, 2)"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.verbose);
    }
}
