//! Core types: Asset, Shares, Weight

use std::borrow::Borrow;
use std::fmt;

/// Opaque asset identifier, usually a ticker symbol.
///
/// Equality and hashing are by value, so `Asset::new("AAPL")` built in two
/// places keys the same map entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Asset(String);

impl Asset {
    pub fn new(symbol: impl Into<String>) -> Self {
        Asset(symbol.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Asset {
    fn from(s: &str) -> Self {
        Asset(s.to_owned())
    }
}

impl From<String> for Asset {
    fn from(s: String) -> Self {
        Asset(s)
    }
}

impl Borrow<str> for Asset {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Share count. Fractional shares are allowed.
pub type Shares = f64;

/// Target weight as a fraction of total portfolio value, in `[0, 1]`.
pub type Weight = f64;

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn equality_by_value() {
        assert_eq!(Asset::new("AAPL"), Asset::from("AAPL"));
        assert_ne!(Asset::new("AAPL"), Asset::new("META"));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Asset::new("META")), "META");
    }

    #[test]
    fn lookup_by_str() {
        let mut map: FxHashMap<Asset, f64> = FxHashMap::default();
        map.insert(Asset::new("AAPL"), 20.0);
        assert_eq!(map.get("AAPL"), Some(&20.0));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Asset::new("AAPL")).unwrap();
        assert_eq!(json, "\"AAPL\"");
        let back: Asset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "AAPL");
    }
}
