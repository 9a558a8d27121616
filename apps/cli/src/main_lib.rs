use std::io::Read;

use anyhow::Context;
use equidash_core::{Holding, HoldingsViewService, HoldingsViewServiceTrait};
use serde::Deserialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::args::{Cli, Command, InputSource};
use crate::config::Config;

/// Installs the log subscriber. Output goes to stderr so stdout carries only
/// the JSON view model.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Accepted shapes of a holdings document.
#[derive(Deserialize)]
#[serde(untagged)]
enum HoldingsDocument {
    List(Vec<Holding>),
    Wrapped { holdings: Vec<Holding> },
}

pub fn parse_holdings(json: &str) -> anyhow::Result<Vec<Holding>> {
    let document: HoldingsDocument =
        serde_json::from_str(json).context("Input is not a holdings document")?;
    Ok(match document {
        HoldingsDocument::List(holdings) => holdings,
        HoldingsDocument::Wrapped { holdings } => holdings,
    })
}

pub fn load_holdings(input: &InputSource) -> anyhow::Result<Vec<Holding>> {
    let json = match input {
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read holdings from stdin")?;
            buffer
        }
        InputSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read holdings from {}", path.display()))?,
    };
    parse_holdings(&json)
}

/// Runs one command and returns the pretty-printed JSON view model.
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let service = HoldingsViewService::new(config.settings.clone())?;
    let holdings = load_holdings(&cli.command.input())?;
    tracing::info!("Loaded {} holdings", holdings.len());

    let output = match &cli.command {
        Command::Holdings { .. } => {
            let query = cli.command.query().unwrap_or_default();
            serde_json::to_string_pretty(&service.holdings_table(&holdings, &query))?
        }
        Command::Dashboard { .. } => serde_json::to_string_pretty(&service.dashboard(&holdings)?)?,
        Command::ProfitLoss { .. } => {
            serde_json::to_string_pretty(&service.profit_loss(&holdings)?)?
        }
    };
    Ok(output)
}
