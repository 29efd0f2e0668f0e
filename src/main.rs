use clap::Parser;
use console::style;
use log::{error, info};

use folio::{App, Cli, Commands, Config, Result};

pub fn initialize_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let app = App::new(config, cli.verbose)?;
    match cli.command {
        Commands::Shell => app.run_shell().await,
        command => app.run(command).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    info!("Application starting up");

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("{} {}", style("error:").red(), e);
        std::process::exit(1);
    }

    info!("Application shutting down");
}
