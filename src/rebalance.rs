//! CURRENT→TARGET rebalance engine.
//!
//! Walks the held assets, compares each one's market value to its share of
//! total portfolio value, and converts the gap into a share quantity to sell
//! (over-allocated) or buy (under-allocated).
//!
//! Only held assets are evaluated. An asset with a target weight but no
//! current position never gets a buy instruction.

use log::{debug, warn};

use crate::config::RebalanceConfig;
use crate::error::Result;
use crate::oracle::PriceOracle;
use crate::portfolio::{Portfolio, checked_price};
use crate::transaction::Transaction;

/// Rebalance engine bound to a price source and a policy.
#[derive(Debug, Clone)]
pub struct Rebalancer<P> {
    oracle: P,
    config: RebalanceConfig,
}

impl<P: PriceOracle> Rebalancer<P> {
    /// Create a rebalancer with the default config.
    pub fn new(oracle: P) -> Self {
        Self {
            oracle,
            config: RebalanceConfig::default(),
        }
    }

    /// Create a rebalancer with an explicit config, rejecting invalid ones.
    pub fn with_config(oracle: P, config: RebalanceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { oracle, config })
    }

    pub fn config(&self) -> &RebalanceConfig {
        &self.config
    }

    pub fn oracle(&self) -> &P {
        &self.oracle
    }

    /// Compute the trades that bring `portfolio` back to its target weights.
    pub fn rebalance(&self, portfolio: &Portfolio) -> Result<Transaction> {
        rebalance_with(portfolio, &self.oracle, &self.config)
    }
}

/// Rebalance with the default config.
pub fn rebalance(portfolio: &Portfolio, oracle: &(impl PriceOracle + ?Sized)) -> Result<Transaction> {
    rebalance_with(portfolio, oracle, &RebalanceConfig::default())
}

/// Rebalance with an explicit config.
///
/// # Errors
///
/// - [`Error::NegativeShares`] / [`Error::NonFiniteShares`] for bad share counts
/// - [`Error::InvalidWeight`] for weights outside `[0, 1]`
/// - [`Error::InvalidPrice`] if the oracle returns a non-positive or non-finite price
///   for any held asset
/// - [`Error::NonFiniteValue`] if total portfolio value overflows
///
/// Target weights that do not sum to 1.0 are logged, not rejected.
///
/// [`Error::NegativeShares`]: crate::Error::NegativeShares
/// [`Error::NonFiniteShares`]: crate::Error::NonFiniteShares
/// [`Error::InvalidWeight`]: crate::Error::InvalidWeight
/// [`Error::InvalidPrice`]: crate::Error::InvalidPrice
/// [`Error::NonFiniteValue`]: crate::Error::NonFiniteValue
pub fn rebalance_with(
    portfolio: &Portfolio,
    oracle: &(impl PriceOracle + ?Sized),
    config: &RebalanceConfig,
) -> Result<Transaction> {
    portfolio.validate()?;

    let weight_sum = portfolio.target_weight_sum();
    if (weight_sum - 1.0).abs() > config.weight_tolerance {
        warn!(
            "target weights sum to {weight_sum:.6}, not 1.0 (tolerance {})",
            config.weight_tolerance
        );
    }

    // 1. Total value (first oracle pass, validates every price)
    let total_value = portfolio.total_value(oracle)?;

    // 2. Per-asset diff (second oracle pass)
    let mut transaction = Transaction::new();
    for (asset, &shares) in portfolio.holdings() {
        let price = checked_price(oracle, asset)?;
        let current_value = shares * price;
        let target_value = portfolio.target_weight(asset) * total_value;
        let value_diff = current_value - target_value;

        if value_diff.abs() <= config.min_trade_value {
            debug!("{asset}: balanced (value diff {value_diff:.4})");
            continue;
        }

        let shares_diff = value_diff / price;
        if value_diff > 0.0 {
            debug!("{asset}: over-allocated by {value_diff:.4}, sell {shares_diff:.4}");
            transaction.record_sell(asset.clone(), shares_diff);
        } else {
            debug!("{asset}: under-allocated by {:.4}, buy {:.4}", -value_diff, -shares_diff);
            transaction.record_buy(asset.clone(), -shares_diff);
        }
    }

    Ok(transaction)
}
