//! Error types for the rebalancer.

use std::path::PathBuf;

use crate::types::Asset;

/// All errors that can occur while loading inputs or rebalancing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid price for {asset}: {price} (must be positive and finite)")]
    InvalidPrice { asset: Asset, price: f64 },

    #[error("negative share count for {asset}: {shares}")]
    NegativeShares { asset: Asset, shares: f64 },

    #[error("non-finite share count for {asset}")]
    NonFiniteShares { asset: Asset },

    #[error("invalid target weight for {asset}: {weight} (must be in [0, 1])")]
    InvalidWeight { asset: Asset, weight: f64 },

    #[error("portfolio value overflowed: {value}")]
    NonFiniteValue { value: f64 },

    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read portfolio file {path}: {source}")]
    PortfolioRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse portfolio JSON: {0}")]
    PortfolioParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
