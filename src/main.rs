//! Command-line front end for validated option enumerations.
//!
//! Checks a value against a declaration on the spot, or validates and
//! reports on an option file that declares many enumerated options.
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
mod utils;

#[derive(Parser)]
#[command(name = "option-enum")]
#[command(about = "Validate values of enumerated configuration options")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a value against an enumeration declaration
    Check {
        /// Declaration, e.g. "first=1 second=2 third"
        #[arg(short, long)]
        declaration: String,
        /// Accept a whitespace separated list of names
        #[arg(short, long)]
        multi: bool,
        /// Retire a name, as OLD=NEW (repeatable)
        #[arg(long = "deprecate", value_parser = utils::parse_deprecation)]
        deprecations: Vec<(String, String)>,
        /// The value to check
        value: String,
    },
    /// Report every problem in an option file
    Validate { file: PathBuf },
    /// Print the vocabulary and selection of every option in a file
    Show { file: PathBuf },
    /// Create a default option file
    Init {
        #[arg(default_value = "options.toml")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            declaration,
            multi,
            deprecations,
            value,
        } => utils::check_value(&declaration, &value, multi, &deprecations),
        Commands::Validate { file } => utils::validate_file(&file),
        Commands::Show { file } => utils::show_file(&file),
        Commands::Init { file } => utils::initialize_file(&file),
    }
}
