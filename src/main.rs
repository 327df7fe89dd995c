mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    let data_dir = args.data_dir.as_deref();

    let result = match &args.command {
        Commands::Record { event } => cli::commands::record::execute(event, data_dir),
        Commands::View { period, at, json } => {
            cli::commands::view::execute(period, at.as_deref(), *json, data_dir)
        }
        Commands::Status => cli::commands::status::execute(data_dir),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
