use mm_app::cli::Cli;
use mm_app::{App, AppErrorResult, commands, logger};

use mm_config::Config;
use mm_session::FileStore;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppErrorResult<ExitCode> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Relative log file paths live in the config directory
    let log_file = match config.logging.file {
        Some(ref file) => {
            let path = PathBuf::from(file);
            Some(if path.is_absolute() {
                path
            } else {
                Config::config_dir()?.join(path)
            })
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;
    config.log_summary();

    let storage = FileStore::new(config.storage_path()?);
    let mut app = App::from_config(&config, storage)?;

    let output = commands::execute(cli.command, &mut app).await?;
    output.print(cli.pretty)
}
