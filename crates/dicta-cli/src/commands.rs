use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dicta_constants::DEFAULT_GRAMMAR;

#[derive(Parser)]
#[command(name = "dicta")]
#[command(version = "0.1.0")]
#[command(propagate_version = true)]
#[command(about = "A digitization toolkit for scanned print dictionaries", long_about = None)]
#[command(disable_help_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Suppress everything except errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parses dictionary entries from a document export
    #[command(alias = "p")]
    Parse {
        /// Path to the document export (JSON)
        document: PathBuf,
        /// Grammar applied to each entry
        #[arg(short = 'g', long = "grammar", default_value = DEFAULT_GRAMMAR)]
        grammar: String,
        /// Write the YAML here instead of stdout
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Composes the session environment from shell.json
    #[command(alias = "shell")]
    Env {
        /// Project directory holding shell.json
        #[arg(short = 'C', long = "dir", default_value = ".")]
        dir: PathBuf,
        /// Catalog file overriding the configured location
        #[arg(long = "catalog")]
        catalog: Option<PathBuf>,
        /// Print the composed environment as JSON
        #[arg(long)]
        json: bool,
    },
    /// Lists packages available in the catalog
    #[command(alias = "ls")]
    List {
        /// Project directory holding shell.json
        #[arg(short = 'C', long = "dir", default_value = ".")]
        dir: PathBuf,
        /// Catalog file overriding the configured location
        #[arg(long = "catalog")]
        catalog: Option<PathBuf>,
    },
    /// Initializes a new shell.json file
    #[command(alias = "new")]
    Init {
        /// Skips interactive prompts
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Shows help information for dicta or a specific command
    Help {
        /// The command to show help for (optional)
        #[arg()]
        command: Option<String>,
    },
}
