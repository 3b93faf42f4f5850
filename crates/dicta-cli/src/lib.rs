pub mod commands;
pub mod handlers;

use clap::Parser;

use commands::{Cli, Commands};
use handlers::{EnvHandler, HelpHandler, InitHandler, ListHandler, ParseHandler};

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dicta_logger::init_logger(cli.quiet);

    match &cli.command {
        Commands::Parse {
            document,
            grammar,
            output,
            debug,
        } => ParseHandler::handle_parse(document, grammar, output.as_deref(), *debug),
        Commands::Env { dir, catalog, json } => {
            EnvHandler::handle_env(dir, catalog.as_deref(), *json)
        }
        Commands::List { dir, catalog } => ListHandler::handle_list(dir, catalog.as_deref()),
        Commands::Init { yes } => InitHandler::handle_init(*yes),
        Commands::Help { command } => HelpHandler::handle_help(command.as_deref()),
    }
}
