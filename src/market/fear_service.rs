//! Service computing the market and per-sector fear scores.

use std::sync::Arc;

use chrono::Utc;
use log::debug;

use crate::constants::MARKET_CAP_REFERENCE;
use crate::market::market_model::{
    MarketFearScore, MarketSnapshot, SectorFearScore, SectorSnapshot, Sentiment,
};
use crate::market::noise::{NoiseSource, ThreadRngNoise};

// Market-level term weights. They sum to 100 at saturation.
const BREADTH_WEIGHT: f64 = 30.0;
const VOLUME_WEIGHT: f64 = 20.0;
const INDEX_DROP_WEIGHT: f64 = 15.0;
const MARKET_CAP_WEIGHT: f64 = 15.0;
const NOISE_WEIGHT: f64 = 20.0;

// Sector-level term weights.
const SECTOR_BREADTH_WEIGHT: f64 = 40.0;
const SECTOR_DROP_WEIGHT: f64 = 30.0;
const SECTOR_VOLATILITY_WEIGHT: f64 = 30.0;

/// Volatility reading that saturates the sector volatility term.
const VOLATILITY_SCALE: f64 = 5.0;

/// Computes bounded [0, 100] fear scores from market and sector snapshots.
///
/// The volatility noise term comes from the injected [`NoiseSource`], so a
/// fixed source makes every score deterministic.
pub struct FearIndexService {
    noise: Arc<dyn NoiseSource>,
}

impl FearIndexService {
    pub fn new(noise: Arc<dyn NoiseSource>) -> Self {
        Self { noise }
    }

    /// Scores one market snapshot.
    ///
    /// Every ratio is zero-guarded: a missing denominator contributes 0
    /// to the score instead of raising a division error.
    pub fn score_market(&self, snapshot: &MarketSnapshot) -> MarketFearScore {
        let breadth = snapshot.decline_ratio() * BREADTH_WEIGHT;

        // Volume shortfall: trading below the average volume reads as fear.
        let volume_shortfall = if snapshot.avg_volume == 0 {
            0.0
        } else {
            let volume_ratio = snapshot.volume as f64 / snapshot.avg_volume as f64;
            (1.0 - volume_ratio.min(1.0)) * VOLUME_WEIGHT
        };

        let index_drop = snapshot.change_percent.min(0.0).abs() * INDEX_DROP_WEIGHT;
        let cap_shortfall = (1.0 - snapshot.market_cap / MARKET_CAP_REFERENCE) * MARKET_CAP_WEIGHT;
        let noise = self.noise.sample() * NOISE_WEIGHT;

        let raw = breadth + volume_shortfall + index_drop + cap_shortfall + noise;
        let score = bound_score(raw);

        debug!(
            "market fear score {} (breadth {:.2}, volume {:.2}, drop {:.2}, cap {:.2}, noise {:.2})",
            score, breadth, volume_shortfall, index_drop, cap_shortfall, noise
        );

        MarketFearScore {
            score,
            sentiment: Sentiment::from_score(score),
            as_of: Utc::now(),
        }
    }

    /// Scores each sector independently and returns the rows sorted
    /// descending by score for display.
    pub fn score_sectors(&self, sectors: &[SectorSnapshot]) -> Vec<SectorFearScore> {
        let mut scored: Vec<SectorFearScore> = sectors.iter().map(score_sector).collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }
}

impl Default for FearIndexService {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngNoise))
    }
}

/// Scores a single sector row. Deterministic: sectors carry no noise term.
fn score_sector(sector: &SectorSnapshot) -> SectorFearScore {
    let breadth = sector.decline_ratio() * SECTOR_BREADTH_WEIGHT;
    let drop = sector.change_percent.min(0.0).abs() * SECTOR_DROP_WEIGHT;
    let volatility = (sector.volatility / VOLATILITY_SCALE) * SECTOR_VOLATILITY_WEIGHT;

    let score = bound_score(breadth + drop + volatility);

    SectorFearScore {
        name: sector.name.clone(),
        score,
        sentiment: Sentiment::from_score(score),
        change_percent: sector.change_percent,
        volatility: sector.volatility,
    }
}

/// Rounds to two decimals and clamps into [0, 100].
fn bound_score(raw: f64) -> f64 {
    let rounded = (raw * 100.0).round() / 100.0;
    rounded.clamp(0.0, 100.0)
}
