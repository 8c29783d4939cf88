use std::sync::Arc;

use crate::market::fear_service::FearIndexService;
use crate::market::market_model::{MarketSnapshot, SectorSnapshot, Sentiment};
use crate::market::noise::FixedNoise;

fn quiet_service() -> FearIndexService {
    FearIndexService::new(Arc::new(FixedNoise(0.0)))
}

fn snapshot() -> MarketSnapshot {
    MarketSnapshot {
        change_percent: -2.0,
        volume: 10_000_000,
        avg_volume: 20_000_000,
        declines: 100,
        advances: 100,
        market_cap: 3.0e12,
    }
}

fn sector(name: &str, change_percent: f64, declines: u32, total: u32, volatility: f64) -> SectorSnapshot {
    SectorSnapshot {
        name: name.to_string(),
        change_percent,
        volume: 1_000_000,
        declines,
        total_stocks: total,
        volatility,
    }
}

#[test]
fn market_score_is_deterministic_with_fixed_noise() {
    let service = quiet_service();
    // breadth 0.5*30 + volume (1-0.5)*20 + drop 2*15 + cap 0 + noise 0
    let result = service.score_market(&snapshot());
    assert_eq!(result.score, 55.0);
    assert_eq!(result.sentiment, Sentiment::Concerned);

    let again = service.score_market(&snapshot());
    assert_eq!(again.score, result.score);
}

#[test]
fn market_score_stays_in_bounds() {
    let service = quiet_service();

    let panic_session = MarketSnapshot {
        change_percent: -10.0,
        volume: 0,
        avg_volume: 20_000_000,
        declines: 200,
        advances: 0,
        market_cap: 2.0e12,
    };
    assert_eq!(service.score_market(&panic_session).score, 100.0);

    // Market cap above the reference would push the raw score negative.
    let oversized = MarketSnapshot {
        change_percent: 1.0,
        volume: 30_000_000,
        avg_volume: 20_000_000,
        declines: 0,
        advances: 200,
        market_cap: 4.0e12,
    };
    assert_eq!(service.score_market(&oversized).score, 0.0);
}

#[test]
fn score_increases_with_decline_ratio() {
    let service = quiet_service();
    let mut calm = snapshot();
    calm.declines = 50;
    let mut fearful = snapshot();
    fearful.declines = 150;

    let low = service.score_market(&calm).score;
    let high = service.score_market(&fearful).score;
    assert!(high > low);
}

#[test]
fn zero_denominators_contribute_nothing() {
    let service = quiet_service();
    let empty_session = MarketSnapshot {
        change_percent: 0.0,
        volume: 0,
        avg_volume: 0,
        declines: 0,
        advances: 0,
        market_cap: 3.0e12,
    };
    let result = service.score_market(&empty_session);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.sentiment, Sentiment::VeryCalm);
}

#[test]
fn sentiment_bucket_boundaries() {
    assert_eq!(Sentiment::from_score(0.0), Sentiment::VeryCalm);
    assert_eq!(Sentiment::from_score(24.99), Sentiment::VeryCalm);
    assert_eq!(Sentiment::from_score(25.0), Sentiment::Stable);
    assert_eq!(Sentiment::from_score(49.99), Sentiment::Stable);
    assert_eq!(Sentiment::from_score(50.0), Sentiment::Concerned);
    assert_eq!(Sentiment::from_score(74.99), Sentiment::Concerned);
    assert_eq!(Sentiment::from_score(75.0), Sentiment::SevereFear);
    assert_eq!(Sentiment::from_score(100.0), Sentiment::SevereFear);
}

#[test]
fn sector_formula_and_empty_sector_guard() {
    let service = quiet_service();
    // breadth 0.5*40 + drop 1*30 + volatility 2.5/5*30
    let scored = service.score_sectors(&[sector("البنوك", -1.0, 10, 20, 2.5)]);
    assert_eq!(scored[0].score, 65.0);
    assert_eq!(scored[0].sentiment, Sentiment::Concerned);

    let empty = service.score_sectors(&[sector("التأمين", 0.0, 0, 0, 0.0)]);
    assert_eq!(empty[0].score, 0.0);
}

#[test]
fn sector_scores_are_order_invariant_and_sorted() {
    let service = quiet_service();
    let calm = sector("الاتصالات", 0.5, 2, 40, 0.5);
    let stressed = sector("البتروكيماويات", -2.5, 25, 30, 3.0);

    let forward = service.score_sectors(&[calm.clone(), stressed.clone()]);
    let reversed = service.score_sectors(&[stressed, calm]);

    // Same rows come back in the same (descending) order either way.
    assert_eq!(forward[0].name, reversed[0].name);
    assert_eq!(forward[0].score, reversed[0].score);
    assert_eq!(forward[1].score, reversed[1].score);
    assert!(forward[0].score >= forward[1].score);
}
