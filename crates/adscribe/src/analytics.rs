//! Aggregate figures for the analytics view.
//!
//! All numbers are derived from the simulated metrics stamped at creation,
//! so the summary is only as meaningful as those placeholders.

use serde::Serialize;

use crate::metrics::round_to_cents;
use crate::model::{Campaign, CampaignStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignPerformance {
    pub name: String,
    pub impressions: u32,
    pub click_through_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub campaigns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total_campaigns: usize,
    pub live_campaigns: usize,
    pub pending_campaigns: usize,
    pub total_impressions: u64,
    /// Mean click-through rate, two decimals; 0 when there are no campaigns.
    pub average_ctr: f64,
    /// Campaign count per location, in first-seen order.
    pub by_location: Vec<LocationCount>,
    /// One row per campaign, in list order.
    pub performance: Vec<CampaignPerformance>,
}

impl AnalyticsSummary {
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        let total_campaigns = campaigns.len();
        let live_campaigns = campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Live)
            .count();
        let total_impressions = campaigns.iter().map(|c| u64::from(c.impressions)).sum();
        let average_ctr = if campaigns.is_empty() {
            0.0
        } else {
            let sum: f64 = campaigns.iter().map(|c| c.click_through_rate).sum();
            round_to_cents(sum / total_campaigns as f64)
        };

        let mut by_location: Vec<LocationCount> = Vec::new();
        for campaign in campaigns {
            match by_location
                .iter_mut()
                .find(|entry| entry.location == campaign.location)
            {
                Some(entry) => entry.campaigns += 1,
                None => by_location.push(LocationCount {
                    location: campaign.location.clone(),
                    campaigns: 1,
                }),
            }
        }

        let performance = campaigns
            .iter()
            .map(|c| CampaignPerformance {
                name: c.name.clone(),
                impressions: c.impressions,
                click_through_rate: c.click_through_rate,
            })
            .collect();

        Self {
            total_campaigns,
            live_campaigns,
            pending_campaigns: total_campaigns - live_campaigns,
            total_impressions,
            average_ctr,
            by_location,
            performance,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_campaigns == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::InitialMetrics;
    use crate::model::NewCampaign;

    fn campaign(name: &str, location: &str, status: CampaignStatus, imp: u32, ctr: f64) -> Campaign {
        Campaign::new(
            NewCampaign {
                name: name.into(),
                location: location.into(),
                ..Default::default()
            },
            InitialMetrics {
                status,
                impressions: imp,
                click_through_rate: ctr,
            },
        )
    }

    #[test]
    fn test_empty_collection() {
        let summary = AnalyticsSummary::from_campaigns(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total_impressions, 0);
        assert_eq!(summary.average_ctr, 0.0);
        assert!(summary.by_location.is_empty());
    }

    #[test]
    fn test_totals_and_average() {
        let campaigns = vec![
            campaign("A", "USA", CampaignStatus::Live, 10_000, 2.0),
            campaign("B", "UK", CampaignStatus::Pending, 20_000, 3.0),
            campaign("C", "USA", CampaignStatus::Live, 99_999, 4.01),
        ];
        let summary = AnalyticsSummary::from_campaigns(&campaigns);
        assert_eq!(summary.total_campaigns, 3);
        assert_eq!(summary.live_campaigns, 2);
        assert_eq!(summary.pending_campaigns, 1);
        assert_eq!(summary.total_impressions, 129_999);
        assert_eq!(summary.average_ctr, 3.0);
        assert_eq!(
            summary.by_location,
            vec![
                LocationCount {
                    location: "USA".into(),
                    campaigns: 2
                },
                LocationCount {
                    location: "UK".into(),
                    campaigns: 1
                },
            ]
        );
        assert_eq!(summary.performance[2].name, "C");
        assert_eq!(summary.performance[2].impressions, 99_999);
    }

    #[test]
    fn test_impressions_do_not_overflow_u32() {
        let campaigns: Vec<_> = (0..50_000)
            .map(|i| campaign(&i.to_string(), "UAE", CampaignStatus::Live, 99_999, 1.0))
            .collect();
        let summary = AnalyticsSummary::from_campaigns(&campaigns);
        assert_eq!(summary.total_impressions, 50_000 * 99_999);
    }
}
