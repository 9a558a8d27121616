mod args;
mod config;
mod main_lib;

use clap::Parser;

use args::Cli;
use config::Config;
use main_lib::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config.log_format);

    let output = run(&cli, &config)?;
    println!("{output}");
    Ok(())
}
