use clap::{Args, Parser, Subcommand, ValueEnum};

use periodic::ElementField;

#[derive(Parser)]
#[command(
    name = "periodic",
    about = "Look up chemical elements by name, symbol, or atomic number",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub output: OutputOptions,

    /// Starts the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up an element by name (British or American spelling)
    #[command(visible_alias = "n")]
    Name {
        /// Element name, e.g. "Aluminium" or "aluminum"
        name: String,
    },

    /// Look up an element by symbol
    #[command(visible_alias = "s")]
    Symbol {
        /// Element symbol, e.g. "Fe" or "fe"
        symbol: String,
    },

    /// Look up an element by atomic number
    #[command(visible_alias = "z")]
    Number {
        /// Atomic number
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },

    /// Look up by atomic number, symbol, or name, whichever matches
    #[command(visible_alias = "f")]
    Find {
        /// Number, symbol, or name
        query: String,
    },

    /// Look up on an explicit field
    Search {
        /// Field to match on (atomic, name, symbol)
        #[arg(short, long, value_name = "FIELD")]
        field: ElementField,

        /// Value to look for
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print every element in the table
    #[command(visible_alias = "ls")]
    List,

    /// Interactive lookup shell
    #[command(visible_alias = "sh")]
    Shell,
}

/// Output options shared by all commands.
#[derive(Args)]
pub struct OutputOptions {
    /// Output format for results
    #[arg(
        long,
        value_name = "FORMAT",
        default_value = "text",
        global = true
    )]
    pub format: OutputFormat,

    /// Suppress the banner and status messages (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON records
    Json,
}

pub fn parse() -> Cli {
    Cli::parse()
}
