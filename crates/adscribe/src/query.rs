//! Consumer-side filtering over the campaign list.
//!
//! Filters never touch the store: they take the current snapshot and return
//! the matching records in their original order.

use crate::model::{Campaign, CampaignStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    /// Case-insensitive substring matched against name, location and interests.
    pub search: Option<String>,
    pub status: Option<CampaignStatus>,
}

impl CampaignFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            status: None,
        }
    }

    pub fn with_status(mut self, status: CampaignStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.search_term().is_none()
    }

    pub fn matches(&self, campaign: &Campaign) -> bool {
        self.matches_with(campaign, self.search_term().as_deref())
    }

    pub fn apply<'a>(&self, campaigns: &'a [Campaign]) -> Vec<&'a Campaign> {
        let term = self.search_term();
        campaigns
            .iter()
            .filter(|c| self.matches_with(c, term.as_deref()))
            .collect()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    fn matches_with(&self, campaign: &Campaign, term: Option<&str>) -> bool {
        if let Some(status) = self.status {
            if campaign.status != status {
                return false;
            }
        }
        term.map_or(true, |t| matches_term(campaign, t))
    }
}

fn matches_term(campaign: &Campaign, term: &str) -> bool {
    campaign.name.to_lowercase().contains(term)
        || campaign.location.to_lowercase().contains(term)
        || campaign
            .interests
            .iter()
            .any(|i| i.to_lowercase().contains(term))
}
