//! CLI interface for drip-edge
//!
//! Provides subcommands for:
//! - `convert`: American odds <-> implied probability
//! - `devig`: Remove the overround from a market
//! - `edge`: Compare one sportsbook line with one contract price
//! - `rank`: Rank fixtures from a JSON file by gap
//! - `config`: Show effective configuration

mod convert;
mod devig;
mod edge;
mod rank;

pub use convert::ConvertArgs;
pub use devig::{DevigArgs, MethodArg};
pub use edge::EdgeArgs;
pub use rank::{OutputFormat, RankArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "drip-edge")]
#[command(about = "Sportsbook vs prediction-market edge engine for World Cup matches")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert between American odds and implied probability
    Convert(ConvertArgs),
    /// Remove the vig from a set of implied probabilities
    Devig(DevigArgs),
    /// Compute the edge between a sportsbook line and a contract price
    Edge(EdgeArgs),
    /// Rank fixtures by largest gap
    Rank(RankArgs),
    /// Show configuration
    Config,
}
