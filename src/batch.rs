//! Parallel rebalancing of independent portfolios.

use crate::config::RebalanceConfig;
use crate::error::Result;
use crate::oracle::PriceOracle;
use crate::portfolio::Portfolio;
use crate::rebalance::rebalance_with;
use crate::transaction::Transaction;

/// Rebalance many portfolios in parallel against one shared price source.
///
/// Each portfolio is independent, so results line up with `portfolios` by
/// index and one failure does not affect the others.
///
/// # Example
///
/// ```
/// use rebalancer::{Asset, Portfolio, RebalanceConfig, StaticPrices, batch};
///
/// let accounts = vec![
///     Portfolio::default().with_holding("AAPL", 20.0).with_target("AAPL", 1.0),
///     Portfolio::default()
///         .with_holding("AAPL", 20.0)
///         .with_holding("META", 6.0)
///         .with_target("META", 1.0),
/// ];
/// let results =
///     batch::rebalance_all(&accounts, &StaticPrices::reference(), &RebalanceConfig::default());
///
/// assert!(results[0].as_ref().unwrap().is_empty());
/// let second = results[1].as_ref().unwrap();
/// assert!((second.sell_quantity(&Asset::new("AAPL")) - 20.0).abs() < 1e-9);
/// ```
pub fn rebalance_all<P>(
    portfolios: &[Portfolio],
    oracle: &P,
    config: &RebalanceConfig,
) -> Vec<Result<Transaction>>
where
    P: PriceOracle + Sync + ?Sized,
{
    use rayon::prelude::*;

    portfolios
        .par_iter()
        .map(|portfolio| rebalance_with(portfolio, oracle, config))
        .collect()
}
