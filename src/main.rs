use std::process::ExitCode;

use clap::Parser;

use grants_pager::cli::{
    Cli, CommandOutcome, execute_command, init_logger_from_settings, load_and_merge_config,
};
use grants_pager::config::Environment;
use grants_pager::server::Server;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    match execute_command(&cli, &settings).await? {
        CommandOutcome::Done => Ok(()),
        CommandOutcome::StartServer => {
            let environment = cli
                .env
                .map(Environment::from)
                .unwrap_or_else(Environment::from_env);
            Server::new(settings, environment).run().await
        }
    }
}
