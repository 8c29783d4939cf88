use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{CONCERNED_CEILING, STABLE_CEILING, VERY_CALM_CEILING};

/// Market-wide statistics for a single observation of the all-share index.
///
/// Snapshots are ephemeral: built from a live feed or the sample
/// generator, scored once, and discarded.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Index change since previous close, in percent.
    pub change_percent: f64,
    /// Traded volume for the session so far.
    pub volume: u64,
    /// Average session volume over the reference window.
    pub avg_volume: u64,
    /// Number of declining symbols.
    pub declines: u32,
    /// Number of advancing symbols.
    pub advances: u32,
    /// Total market capitalisation, in SAR.
    pub market_cap: f64,
}

impl MarketSnapshot {
    /// Share of declining symbols among movers. Zero when nothing moved.
    pub fn decline_ratio(&self) -> f64 {
        let movers = self.declines + self.advances;
        if movers == 0 {
            0.0
        } else {
            f64::from(self.declines) / f64::from(movers)
        }
    }
}

/// Per-sector statistics. Ordering of a snapshot set is irrelevant.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SectorSnapshot {
    pub name: String,
    pub change_percent: f64,
    pub volume: u64,
    pub declines: u32,
    pub total_stocks: u32,
    /// Intraday price volatility, arbitrary unit.
    pub volatility: f64,
}

impl SectorSnapshot {
    /// Share of declining symbols in the sector. Zero when the sector is empty.
    pub fn decline_ratio(&self) -> f64 {
        if self.total_stocks == 0 {
            0.0
        } else {
            f64::from(self.declines) / f64::from(self.total_stocks)
        }
    }
}

/// Sentiment label bucketed from a fear score.
///
/// Buckets are `[0, 25)`, `[25, 50)`, `[50, 75)`, `[75, 100]`: the lower
/// bound of each bucket belongs to that bucket, so a score of exactly 75
/// already reads as severe fear.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Sentiment {
    VeryCalm,
    Stable,
    Concerned,
    SevereFear,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        if score < VERY_CALM_CEILING {
            Sentiment::VeryCalm
        } else if score < STABLE_CEILING {
            Sentiment::Stable
        } else if score < CONCERNED_CEILING {
            Sentiment::Concerned
        } else {
            Sentiment::SevereFear
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::VeryCalm => "very calm",
            Sentiment::Stable => "stable",
            Sentiment::Concerned => "concerned",
            Sentiment::SevereFear => "severe fear",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scored market snapshot, ready for a gauge-style visualization.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarketFearScore {
    /// Score in [0, 100], rounded to two decimals.
    pub score: f64,
    pub sentiment: Sentiment,
    pub as_of: DateTime<Utc>,
}

/// Scored sector row for the sector table, sorted descending by score.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SectorFearScore {
    pub name: String,
    /// Score in [0, 100], rounded to two decimals.
    pub score: f64,
    pub sentiment: Sentiment,
    pub change_percent: f64,
    pub volatility: f64,
}
