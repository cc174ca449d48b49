//! # rebalancer
//!
//! Compute the share quantities to buy and sell that bring a stock portfolio
//! back to its target allocation.
//!
//! ## Quick Start
//!
//! ```
//! use rebalancer::{Asset, Portfolio, StaticPrices, rebalance};
//!
//! let portfolio = Portfolio::default()
//!     .with_holding("AAPL", 20.0)
//!     .with_holding("META", 6.0)
//!     .with_target("AAPL", 0.6)
//!     .with_target("META", 0.4);
//!
//! // AAPL at $201.28, META at $670.05
//! let prices = StaticPrices::reference();
//! let transaction = rebalance(&portfolio, &prices).unwrap();
//!
//! assert!((transaction.buy_quantity(&Asset::new("AAPL")) - 3.984).abs() < 0.001);
//! assert!((transaction.sell_quantity(&Asset::new("META")) - 1.197).abs() < 0.001);
//! ```
//!
//! ## Algorithm
//!
//! 1. Total value = Σ shares × price over every held asset.
//! 2. For each held asset, target value = weight × total value.
//! 3. Surplus value is sold, shortfall is bought, both converted to shares at
//!    the current price. Exact matches produce no entry.
//!
//! Assets missing from the target allocation have weight zero and are sold
//! off. Assets with a target but no holding are not bought into.
//!
//! ## Prices
//!
//! Prices come from an injected [`PriceOracle`]. [`StaticPrices`] is a fixed
//! table; any `Fn(&Asset) -> f64` closure also works. Prices that are zero,
//! negative, or non-finite are rejected with [`Error::InvalidPrice`].
//!
//! ```
//! use rebalancer::{Asset, Error, Portfolio, rebalance};
//!
//! let portfolio = Portfolio::default().with_holding("XYZ", 1.0).with_target("XYZ", 1.0);
//! let err = rebalance(&portfolio, &|_: &Asset| 0.0).unwrap_err();
//! assert!(matches!(err, Error::InvalidPrice { .. }));
//! ```
//!
//! ## Policy
//!
//! [`RebalanceConfig`] controls the weight-sum warning tolerance and a dust
//! threshold below which differences are ignored. It loads from TOML:
//!
//! ```
//! use rebalancer::{RebalanceConfig, Rebalancer, StaticPrices};
//!
//! let config = RebalanceConfig::from_toml_str("min_trade_value = 5.0").unwrap();
//! let rebalancer = Rebalancer::with_config(StaticPrices::reference(), config).unwrap();
//! assert_eq!(rebalancer.config().min_trade_value, 5.0);
//! ```

#[cfg(feature = "parallel")]
pub mod batch;
pub mod config;
mod error;
pub mod oracle;
pub mod portfolio;
pub mod rebalance;
mod transaction;
mod types;

// Re-export public API
pub use config::RebalanceConfig;
pub use error::{Error, Result};
pub use oracle::{PriceOracle, StaticPrices};
pub use portfolio::{Holdings, Portfolio, TargetAllocation};
pub use rebalance::{Rebalancer, rebalance, rebalance_with};
pub use transaction::Transaction;
pub use types::{Asset, Shares, Weight};
