use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest quote for a symbol.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    /// Last close price.
    pub close: Decimal,
    pub currency: String,
}

/// Provider-sourced profile data for a symbol.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    pub symbol: String,
    pub name: Option<String>,
    /// Sector classification string, when the provider knows one.
    pub sector: Option<String>,
}

/// Degraded per-symbol lookup result.
///
/// A failed fetch leaves the corresponding field `None` instead of
/// failing the whole batch; downstream the row renders as "no price" /
/// "unknown sector".
#[derive(Debug, Clone, Default)]
pub struct SymbolLookup {
    pub close: Option<Decimal>,
    pub sector: Option<String>,
}
