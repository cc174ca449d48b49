//! Rebalance output: share quantities to sell and to buy.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::portfolio::Holdings;
use crate::types::{Asset, Shares};

/// Serde helper for `FxHashMap<Asset, Shares>`: serializes with keys in sorted order.
mod serde_sorted {
    use super::{Asset, BTreeMap, FxHashMap, Shares};
    use serde::{Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        map: &FxHashMap<Asset, Shares>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let sorted: BTreeMap<&Asset, &Shares> = map.iter().collect();
        sorted.serialize(serializer)
    }
}

/// Quantities to sell and to buy, keyed by asset.
///
/// Quantities are never negative. An asset is in at most one of the two maps,
/// and an asset already at its target is in neither.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Transaction {
    #[serde(serialize_with = "serde_sorted::serialize")]
    sell: FxHashMap<Asset, Shares>,
    #[serde(serialize_with = "serde_sorted::serialize")]
    buy: FxHashMap<Asset, Shares>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_sell(&mut self, asset: Asset, shares: Shares) {
        debug_assert!(shares >= 0.0, "sell quantity must be non-negative, got {shares}");
        self.sell.insert(asset, shares);
    }

    pub(crate) fn record_buy(&mut self, asset: Asset, shares: Shares) {
        debug_assert!(shares >= 0.0, "buy quantity must be non-negative, got {shares}");
        self.buy.insert(asset, shares);
    }

    pub fn sell(&self) -> &FxHashMap<Asset, Shares> {
        &self.sell
    }

    pub fn buy(&self) -> &FxHashMap<Asset, Shares> {
        &self.buy
    }

    /// Shares to sell, or zero if the asset is not being sold.
    pub fn sell_quantity(&self, asset: &Asset) -> Shares {
        self.sell.get(asset).copied().unwrap_or(0.0)
    }

    /// Shares to buy, or zero if the asset is not being bought.
    pub fn buy_quantity(&self, asset: &Asset) -> Shares {
        self.buy.get(asset).copied().unwrap_or(0.0)
    }

    /// No trades needed.
    pub fn is_empty(&self) -> bool {
        self.sell.is_empty() && self.buy.is_empty()
    }

    /// Holdings after executing every trade at unchanged prices.
    pub fn apply(&self, holdings: &Holdings) -> Holdings {
        let mut after = holdings.clone();
        for (asset, &shares) in &self.sell {
            *after.entry(asset.clone()).or_insert(0.0) -= shares;
        }
        for (asset, &shares) in &self.buy {
            *after.entry(asset.clone()).or_insert(0.0) += shares;
        }
        after
    }

    /// JSON rendering with sorted keys.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, side: &FxHashMap<Asset, Shares>) -> fmt::Result {
    let sorted: BTreeMap<&Asset, &Shares> = side.iter().collect();
    write!(f, "{{")?;
    for (i, (asset, shares)) in sorted.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{asset}: {shares:.4}")?;
    }
    write!(f, "}}")
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BUY  ")?;
        write_side(f, &self.buy)?;
        writeln!(f)?;
        write!(f, "SELL ")?;
        write_side(f, &self.sell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aapl() -> Asset {
        Asset::new("AAPL")
    }
    fn meta() -> Asset {
        Asset::new("META")
    }

    fn sample() -> Transaction {
        let mut t = Transaction::new();
        t.record_sell(meta(), 1.5);
        t.record_buy(aapl(), 4.0);
        t
    }

    #[test]
    fn empty_by_default() {
        let t = Transaction::new();
        assert!(t.is_empty());
        assert_eq!(t.sell_quantity(&aapl()), 0.0);
        assert_eq!(t.buy_quantity(&aapl()), 0.0);
    }

    #[test]
    fn quantities() {
        let t = sample();
        assert!(!t.is_empty());
        assert_eq!(t.sell_quantity(&meta()), 1.5);
        assert_eq!(t.buy_quantity(&aapl()), 4.0);
        assert_eq!(t.sell().len(), 1);
        assert_eq!(t.buy().len(), 1);
    }

    #[test]
    fn apply_adjusts_holdings() {
        let mut holdings = Holdings::default();
        holdings.insert(aapl(), 20.0);
        holdings.insert(meta(), 6.0);

        let after = sample().apply(&holdings);
        assert_eq!(after[&aapl()], 24.0);
        assert_eq!(after[&meta()], 4.5);
        // Input untouched.
        assert_eq!(holdings[&aapl()], 20.0);
    }

    #[test]
    fn apply_inserts_new_buys() {
        let after = sample().apply(&Holdings::default());
        assert_eq!(after[&aapl()], 4.0);
        assert_eq!(after[&meta()], -1.5);
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "BUY  {AAPL: 4.0000}\nSELL {META: 1.5000}"
        );
        assert_eq!(Transaction::new().to_string(), "BUY  {}\nSELL {}");
    }

    #[test]
    fn json_sorted_keys() {
        let mut t = Transaction::new();
        t.record_buy(Asset::new("SPY"), 1.0);
        t.record_buy(aapl(), 2.0);
        t.record_sell(meta(), 0.5);
        assert_eq!(
            t.to_json().unwrap(),
            r#"{"sell":{"META":0.5},"buy":{"AAPL":2.0,"SPY":1.0}}"#
        );
    }
}
