mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => cmd::init::run(),
        Commands::Onboard { file } => cmd::onboard::run(&file, cli.human),
        Commands::Generate { file } => cmd::generate::run(file.as_deref(), cli.human),
        Commands::Show { target } => cmd::show::run(target, cli.human),
        Commands::Status => cmd::status::run(cli.human),
        Commands::Advance => cmd::advance::run(cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
    };

    if let Err(e) = result {
        let err = athenix::output::error("", "general_error", &e.to_string());
        eprintln!("{}", serde_json::to_string(&err).unwrap());
        process::exit(1);
    }
}
