//! Demo snapshot generator.
//!
//! When no live feed is wired up, the dashboards render synthetic data
//! drawn from the same ranges a quiet-to-stressed session would produce.
//! All draws go through the [`NoiseSource`] so demos can be made
//! deterministic the same way scores can.

use crate::market::market_model::{MarketSnapshot, SectorSnapshot};
use crate::market::noise::NoiseSource;

/// Sector names of the exchange's main industry groups.
pub const SAMPLE_SECTORS: [&str; 8] = [
    "البنوك",
    "البتروكيماويات",
    "التأمين",
    "الاتصالات",
    "الطاقة",
    "الأسمنت",
    "التجزئة",
    "الخدمات",
];

/// Generates one synthetic market snapshot.
pub fn sample_market_snapshot(noise: &dyn NoiseSource) -> MarketSnapshot {
    MarketSnapshot {
        change_percent: round2(uniform(noise, -2.5, 1.5)),
        volume: uniform_u64(noise, 10_000_000, 30_000_000),
        avg_volume: uniform_u64(noise, 15_000_000, 25_000_000),
        declines: uniform_u32(noise, 50, 200),
        advances: uniform_u32(noise, 20, 150),
        market_cap: uniform(noise, 2.0e12, 3.0e12),
    }
}

/// Generates one synthetic snapshot per sample sector.
pub fn sample_sector_snapshots(noise: &dyn NoiseSource) -> Vec<SectorSnapshot> {
    SAMPLE_SECTORS
        .iter()
        .map(|name| SectorSnapshot {
            name: (*name).to_string(),
            change_percent: round2(uniform(noise, -3.0, 2.0)),
            volume: uniform_u64(noise, 1_000_000, 5_000_000),
            declines: uniform_u32(noise, 5, 30),
            total_stocks: uniform_u32(noise, 10, 40),
            volatility: round2(uniform(noise, 0.5, 3.5)),
        })
        .collect()
}

fn uniform(noise: &dyn NoiseSource, lo: f64, hi: f64) -> f64 {
    lo + noise.sample() * (hi - lo)
}

fn uniform_u64(noise: &dyn NoiseSource, lo: u64, hi: u64) -> u64 {
    lo + (noise.sample() * (hi - lo + 1) as f64) as u64
}

fn uniform_u32(noise: &dyn NoiseSource, lo: u32, hi: u32) -> u32 {
    lo + (noise.sample() * (hi - lo + 1) as f64) as u32
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::noise::{FixedNoise, SeededNoise};

    #[test]
    fn zero_noise_yields_range_floor() {
        let snapshot = sample_market_snapshot(&FixedNoise(0.0));
        assert_eq!(snapshot.change_percent, -2.5);
        assert_eq!(snapshot.volume, 10_000_000);
        assert_eq!(snapshot.avg_volume, 15_000_000);
        assert_eq!(snapshot.declines, 50);
        assert_eq!(snapshot.advances, 20);
        assert_eq!(snapshot.market_cap, 2.0e12);
    }

    #[test]
    fn sectors_cover_all_groups_within_ranges() {
        let noise = SeededNoise::new(7);
        let sectors = sample_sector_snapshots(&noise);
        assert_eq!(sectors.len(), SAMPLE_SECTORS.len());
        for sector in &sectors {
            assert!((-3.0..=2.0).contains(&sector.change_percent));
            assert!((1_000_000..=5_000_000).contains(&sector.volume));
            assert!((5..=30).contains(&sector.declines));
            assert!((10..=40).contains(&sector.total_stocks));
            assert!((0.5..=3.5).contains(&sector.volatility));
        }
    }

    #[test]
    fn seeded_samples_are_reproducible() {
        let a = sample_market_snapshot(&SeededNoise::new(11));
        let b = sample_market_snapshot(&SeededNoise::new(11));
        assert_eq!(a.volume, b.volume);
        assert_eq!(a.declines, b.declines);
        assert_eq!(a.change_percent, b.change_percent);
    }
}
