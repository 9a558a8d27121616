//! Command-line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use equidash_core::{SortDirection, SortField, ViewQuery};

/// Holdings views over an exported account.
///
/// FILE is a JSON array of holdings or an object with a `holdings` array;
/// use `-` to read from stdin.
#[derive(Debug, Parser)]
#[command(name = "equidash", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filtered and sorted holdings table
    Holdings {
        #[command(flatten)]
        input: InputArg,

        /// Keep holdings whose name contains TERM (case-insensitive)
        #[arg(long, value_name = "TERM", default_value = "")]
        search: String,

        /// name | purchaseValue | currentValue | profitLoss | profitLossPercentage
        #[arg(long, value_name = "FIELD", value_parser = SortField::from_str, default_value_t = SortField::Name)]
        sort: SortField,

        /// Sort descending
        #[arg(long, conflicts_with = "asc")]
        desc: bool,

        /// Sort ascending (default)
        #[arg(long)]
        asc: bool,
    },
    /// Portfolio summary, allocation and top performers
    Dashboard {
        #[command(flatten)]
        input: InputArg,
    },
    /// Numeric profit/loss per holding and in total
    #[command(alias = "profit_loss")]
    ProfitLoss {
        #[command(flatten)]
        input: InputArg,
    },
}

#[derive(Debug, Args)]
pub struct InputArg {
    /// Holdings document, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputArg {
    pub fn source(&self) -> InputSource {
        if self.file.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(self.file.clone())
        }
    }
}

impl Command {
    pub fn input(&self) -> InputSource {
        match self {
            Command::Holdings { input, .. }
            | Command::Dashboard { input }
            | Command::ProfitLoss { input } => input.source(),
        }
    }

    /// The table query for `holdings`; `None` for the other commands.
    pub fn query(&self) -> Option<ViewQuery> {
        match self {
            Command::Holdings {
                search,
                sort,
                desc,
                asc,
                ..
            } => {
                let direction = if *desc && !*asc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                Some(ViewQuery::new(search.as_str(), *sort, direction))
            }
            Command::Dashboard { .. } | Command::ProfitLoss { .. } => None,
        }
    }
}
