use itertools::Itertools;
use thiserror::Error;

use crate::config::{CatalogEntry, DEFAULT_CATALOG};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("asset symbol '{0}' must be 2-5 uppercase characters")]
    InvalidSymbol(String),
    #[error("asset id must not be empty (symbol '{0}')")]
    EmptyId(String),
    #[error("catalog must contain at least one asset")]
    Empty,
}

/// A tracked asset. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetDescriptor {
    external_id: String,
    symbol: String,
    display_name: String,
}

impl AssetDescriptor {
    pub fn new(
        external_id: impl Into<String>,
        symbol: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let external_id = external_id.into();
        let symbol = symbol.into();
        if !Self::is_valid_symbol(&symbol) {
            return Err(CatalogError::InvalidSymbol(symbol));
        }
        if external_id.trim().is_empty() {
            return Err(CatalogError::EmptyId(symbol));
        }
        Ok(Self {
            external_id,
            symbol,
            display_name: display_name.into(),
        })
    }

    fn is_valid_symbol(symbol: &str) -> bool {
        (2..=5).contains(&symbol.chars().count())
            && symbol
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }

    /// The id the price service knows this asset by (e.g. "binancecoin")
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl TryFrom<&CatalogEntry> for AssetDescriptor {
    type Error = CatalogError;

    fn try_from(entry: &CatalogEntry) -> Result<Self, Self::Error> {
        AssetDescriptor::new(entry.id, entry.symbol, entry.name)
    }
}

impl std::fmt::Display for AssetDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.display_name, self.symbol)
    }
}

/// Fixed, ordered list of supported assets. Passed explicitly to whoever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    assets: Vec<AssetDescriptor>,
}

impl Catalog {
    pub fn new(assets: Vec<AssetDescriptor>) -> Result<Self, CatalogError> {
        if assets.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { assets })
    }

    /// The catalog compiled into the binary (see `config::catalog`).
    pub fn from_config() -> Result<Self, CatalogError> {
        let assets = DEFAULT_CATALOG
            .iter()
            .map(AssetDescriptor::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(assets)
    }

    pub fn assets(&self) -> &[AssetDescriptor] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Comma-joined external ids in catalog order, as expected by `ids=`
    pub fn ids_param(&self) -> String {
        self.assets.iter().map(AssetDescriptor::external_id).join(",")
    }

    // The price service echoes symbols in lowercase, so compare case-insensitively.
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&AssetDescriptor> {
        self.assets
            .iter()
            .find(|asset| asset.symbol.eq_ignore_ascii_case(symbol.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid_and_ordered() {
        let catalog = Catalog::from_config().unwrap();
        assert_eq!(catalog.len(), DEFAULT_CATALOG.len());
        assert_eq!(catalog.assets()[0].external_id(), "bitcoin");
        assert_eq!(catalog.assets()[3].display_name(), "Binance Coin");
        assert!(catalog.ids_param().starts_with("bitcoin,ethereum,ripple,binancecoin"));
    }

    #[test]
    fn ids_param_for_single_asset_has_no_separator() {
        let catalog =
            Catalog::new(vec![AssetDescriptor::new("bitcoin", "BTC", "Bitcoin").unwrap()]).unwrap();
        assert_eq!(catalog.ids_param(), "bitcoin");
    }

    #[test]
    fn symbol_rules() {
        assert!(AssetDescriptor::new("bitcoin", "BTC", "Bitcoin").is_ok());
        assert!(AssetDescriptor::new("hyperliquid", "HYPE", "Hyperliquid").is_ok());
        assert_eq!(
            AssetDescriptor::new("bitcoin", "btc", "Bitcoin"),
            Err(CatalogError::InvalidSymbol("btc".to_string()))
        );
        assert!(AssetDescriptor::new("x", "X", "X").is_err());
        assert!(AssetDescriptor::new("x", "TOOLONG", "X").is_err());
        assert_eq!(
            AssetDescriptor::new(" ", "BTC", "Bitcoin"),
            Err(CatalogError::EmptyId("BTC".to_string()))
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn find_by_symbol_ignores_case() {
        let catalog = Catalog::from_config().unwrap();
        let sol = catalog.find_by_symbol("sol").unwrap();
        assert_eq!(sol.external_id(), "solana");
        assert!(catalog.find_by_symbol("nope").is_none());
    }
}
