//! sonarci - CI companion for running SonarQube scans

use clap::Parser;

mod actions;
mod cli;
mod config;
mod context;
mod error;
mod params;
mod scanner;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    // The runner sets RUNNER_DEBUG=1 when step debug logging is on
    let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    init_logging(cli.debug || runner_debug);

    match cli.command {
        Commands::Run(args) => cli::run::run(&args, cli.config.as_deref()).await,
        Commands::Version => {
            println!("sonarci version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
