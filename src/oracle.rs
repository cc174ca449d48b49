//! Price oracle: the injected source of current unit prices.
//!
//! The rebalancer never reaches for prices on its own. Callers hand it
//! something that implements [`PriceOracle`], which keeps market-data access
//! swappable and lets tests pin prices exactly.
//!
//! ```
//! use rebalancer::{Asset, PriceOracle, StaticPrices};
//!
//! let prices = StaticPrices::reference();
//! assert_eq!(prices.price(&Asset::new("AAPL")), 201.28);
//!
//! // Unknown assets price at zero; the rebalancer rejects them.
//! assert_eq!(prices.price(&Asset::new("TSLA")), 0.0);
//!
//! // Any closure works as an oracle.
//! let flat = |_: &Asset| 10.0;
//! assert_eq!(flat.price(&Asset::new("XYZ")), 10.0);
//! ```

use rustc_hash::FxHashMap;

use crate::types::Asset;

/// A source of current unit prices.
///
/// Implementations should be pure: the rebalancer queries each held asset
/// twice per call and expects the same answer both times.
pub trait PriceOracle {
    /// Current unit price of `asset`. Should be positive and finite.
    fn price(&self, asset: &Asset) -> f64;
}

impl<F> PriceOracle for F
where
    F: Fn(&Asset) -> f64,
{
    #[inline]
    fn price(&self, asset: &Asset) -> f64 {
        self(asset)
    }
}

/// Fixed price table. Assets missing from the table price at `0.0`.
#[derive(Clone, Debug, Default)]
pub struct StaticPrices {
    prices: FxHashMap<Asset, f64>,
}

impl StaticPrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stub table: AAPL at 201.28 and META at 670.05.
    pub fn reference() -> Self {
        Self::new()
            .with_price("AAPL", 201.28)
            .with_price("META", 670.05)
    }

    pub fn with_price(mut self, asset: impl Into<Asset>, price: f64) -> Self {
        self.prices.insert(asset.into(), price);
        self
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PriceOracle for StaticPrices {
    fn price(&self, asset: &Asset) -> f64 {
        self.prices.get(asset).copied().unwrap_or(0.0)
    }
}

impl FromIterator<(Asset, f64)> for StaticPrices {
    fn from_iter<I: IntoIterator<Item = (Asset, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table() {
        let prices = StaticPrices::reference();
        assert_eq!(prices.len(), 2);
        assert_eq!(prices.price(&Asset::new("AAPL")), 201.28);
        assert_eq!(prices.price(&Asset::new("META")), 670.05);
    }

    #[test]
    fn unknown_asset_is_zero() {
        assert_eq!(StaticPrices::new().price(&Asset::new("AAPL")), 0.0);
    }

    #[test]
    fn builder_overrides() {
        let prices = StaticPrices::reference().with_price("AAPL", 150.0);
        assert_eq!(prices.price(&Asset::new("AAPL")), 150.0);
    }

    #[test]
    fn collect_from_pairs() {
        let prices: StaticPrices = [(Asset::new("SPY"), 430.0), (Asset::new("QQQ"), 380.0)]
            .into_iter()
            .collect();
        assert_eq!(prices.price(&Asset::new("QQQ")), 380.0);
    }

    #[test]
    fn closure_oracle() {
        let oracle = |a: &Asset| if a.as_str() == "AAPL" { 100.0 } else { 50.0 };
        assert_eq!(oracle.price(&Asset::new("AAPL")), 100.0);
        assert_eq!(oracle.price(&Asset::new("META")), 50.0);
    }

    #[test]
    fn usable_as_trait_object() {
        let oracle: Box<dyn PriceOracle> = Box::new(StaticPrices::reference());
        assert_eq!(oracle.price(&Asset::new("META")), 670.05);
    }
}
