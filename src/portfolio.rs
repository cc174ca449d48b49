//! Portfolio: current holdings paired with a target allocation.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::oracle::PriceOracle;
use crate::types::{Asset, Shares, Weight};

/// Share count per asset.
pub type Holdings = FxHashMap<Asset, Shares>;

/// Target weight per asset, as a fraction of total portfolio value.
pub type TargetAllocation = FxHashMap<Asset, Weight>;

/// Current holdings and the allocation they should be brought back to.
///
/// Assets held but absent from `targets` have an implicit weight of zero and
/// get sold down entirely. Assets in `targets` that are not held are ignored
/// by the rebalancer.
///
/// Deserializes from:
///
/// ```json
/// { "holdings": { "AAPL": 20, "META": 6 }, "targets": { "AAPL": 0.6, "META": 0.4 } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    holdings: Holdings,
    #[serde(default)]
    targets: TargetAllocation,
}

impl Portfolio {
    pub fn new(holdings: Holdings, targets: TargetAllocation) -> Self {
        Self { holdings, targets }
    }

    pub fn with_holding(mut self, asset: impl Into<Asset>, shares: Shares) -> Self {
        self.holdings.insert(asset.into(), shares);
        self
    }

    pub fn with_target(mut self, asset: impl Into<Asset>, weight: Weight) -> Self {
        self.targets.insert(asset.into(), weight);
        self
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a portfolio JSON document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::PortfolioRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    // === Queries ===

    pub fn holdings(&self) -> &Holdings {
        &self.holdings
    }

    pub fn targets(&self) -> &TargetAllocation {
        &self.targets
    }

    /// Shares held, or zero if the asset is not held.
    pub fn shares(&self, asset: &Asset) -> Shares {
        self.holdings.get(asset).copied().unwrap_or(0.0)
    }

    /// Target weight, or zero if the asset has no target.
    pub fn target_weight(&self, asset: &Asset) -> Weight {
        self.targets.get(asset).copied().unwrap_or(0.0)
    }

    /// Sum of all target weights. Should be 1.0 but is not enforced.
    pub fn target_weight_sum(&self) -> f64 {
        self.targets.values().sum()
    }

    /// Check share counts and target weights.
    ///
    /// Share counts must be finite and non-negative; weights must lie in
    /// `[0, 1]`. Weight sums are not checked here.
    pub fn validate(&self) -> Result<()> {
        for (asset, &shares) in &self.holdings {
            if !shares.is_finite() {
                return Err(Error::NonFiniteShares {
                    asset: asset.clone(),
                });
            }
            if shares < 0.0 {
                return Err(Error::NegativeShares {
                    asset: asset.clone(),
                    shares,
                });
            }
        }
        for (asset, &weight) in &self.targets {
            if !(0.0..=1.0).contains(&weight) {
                return Err(Error::InvalidWeight {
                    asset: asset.clone(),
                    weight,
                });
            }
        }
        Ok(())
    }

    /// Total market value of the holdings: Σ shares × price.
    ///
    /// Fails on the first held asset whose price is not positive and finite,
    /// or if the sum overflows to infinity.
    pub fn total_value(&self, oracle: &(impl PriceOracle + ?Sized)) -> Result<f64> {
        let mut total = 0.0;
        for (asset, &shares) in &self.holdings {
            let price = checked_price(oracle, asset)?;
            total += shares * price;
        }
        if !total.is_finite() {
            return Err(Error::NonFiniteValue { value: total });
        }
        Ok(total)
    }

    /// Current weight of each held asset in total value.
    ///
    /// All weights are zero when the portfolio is worth nothing.
    pub fn current_weights(
        &self,
        oracle: &(impl PriceOracle + ?Sized),
    ) -> Result<FxHashMap<Asset, Weight>> {
        let total = self.total_value(oracle)?;
        let mut weights = FxHashMap::default();
        for (asset, &shares) in &self.holdings {
            let weight = if total > 0.0 {
                shares * checked_price(oracle, asset)? / total
            } else {
                0.0
            };
            weights.insert(asset.clone(), weight);
        }
        Ok(weights)
    }
}

/// Query the oracle and reject prices that are not positive and finite.
pub(crate) fn checked_price(oracle: &(impl PriceOracle + ?Sized), asset: &Asset) -> Result<f64> {
    let price = oracle.price(asset);
    if price.is_finite() && price > 0.0 {
        Ok(price)
    } else {
        Err(Error::InvalidPrice {
            asset: asset.clone(),
            price,
        })
    }
}
