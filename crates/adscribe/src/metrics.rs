//! # Simulated Metrics
//!
//! Campaigns have no metrics pipeline behind them. Their initial `status`,
//! `impressions` and `click_through_rate` are synthesized at creation time.
//! The synthesis lives behind [`MetricsSource`] so a real ingestion source can
//! replace [`SimulatedMetrics`] without changing the campaign store.
//!
//! | Field | Rule |
//! |-------|------|
//! | `status` | fair coin between `Pending` and `Live` |
//! | `impressions` | uniform integer in `[10000, 99999]` |
//! | `click_through_rate` | uniform in `[1.00, 10.00]`, rounded to 2 decimals |

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::CampaignStatus;

pub const MIN_IMPRESSIONS: u32 = 10_000;
pub const MAX_IMPRESSIONS: u32 = 99_999;
pub const MIN_CTR: f64 = 1.0;
pub const MAX_CTR: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialMetrics {
    pub status: CampaignStatus,
    pub impressions: u32,
    pub click_through_rate: f64,
}

/// Supplies the store-assigned fields of a new campaign.
pub trait MetricsSource {
    fn initial_metrics(&mut self) -> InitialMetrics;
}

pub struct SimulatedMetrics {
    rng: StdRng,
}

impl Default for SimulatedMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedMetrics {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence, for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MetricsSource for SimulatedMetrics {
    fn initial_metrics(&mut self) -> InitialMetrics {
        let status = if self.rng.gen_bool(0.5) {
            CampaignStatus::Live
        } else {
            CampaignStatus::Pending
        };
        let impressions = self.rng.gen_range(MIN_IMPRESSIONS..=MAX_IMPRESSIONS);
        let raw_ctr: f64 = self.rng.gen_range(MIN_CTR..=MAX_CTR);
        InitialMetrics {
            status,
            impressions,
            click_through_rate: round_to_cents(raw_ctr),
        }
    }
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
