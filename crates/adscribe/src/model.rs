//! # Domain Model
//!
//! This module defines the records adscribe persists: [`Campaign`], its
//! [`CampaignStatus`], the creator-supplied [`NewCampaign`] fields, and the
//! authenticated [`User`].
//!
//! ## Field Ownership
//!
//! A campaign is split into two groups of fields:
//!
//! 1. **Creator fields** (`name`, `image_url`, `age_range`, `location`,
//!    `interests`, `ad_copy`): supplied once through [`NewCampaign`] and never
//!    edited afterwards.
//! 2. **Store fields** (`id`, `date_created`, `status`, `impressions`,
//!    `click_through_rate`): stamped by the campaign store at creation. Only
//!    `status` changes after that, through an explicit status update.
//!
//! ## Wire Layout
//!
//! Records serialize with camelCase keys so the persisted JSON keeps the
//! layout of the browser dashboard:
//!
//! ```text
//! {
//!   "id": "6f1c…",
//!   "name": "Summer Sale",
//!   "imageUrl": "https://…",
//!   "ageRange": "18-25",
//!   "location": "USA",
//!   "interests": ["Tech", "Fashion"],
//!   "adCopy": "Headline: …",
//!   "status": "Live",
//!   "dateCreated": "2024-06-01T10:00:00Z",
//!   "impressions": 48210,
//!   "clickThroughRate": 3.27
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AdScribeError;
use crate::metrics::InitialMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Pending,
    Live,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Pending => "Pending",
            CampaignStatus::Live => "Live",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = AdScribeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(CampaignStatus::Pending),
            "live" => Ok(CampaignStatus::Live),
            other => Err(AdScribeError::Api(format!(
                "Unknown status '{}' (expected Pending or Live)",
                other
            ))),
        }
    }
}

/// Fields a user supplies when creating a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    pub image_url: String,
    pub age_range: String,
    pub location: String,
    pub interests: Vec<String>,
    pub ad_copy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub age_range: String,
    pub location: String,
    pub interests: Vec<String>,
    pub ad_copy: String,
    pub status: CampaignStatus,
    pub date_created: DateTime<Utc>,
    pub impressions: u32,
    pub click_through_rate: f64,
}

impl Campaign {
    /// Builds a fresh record from creator fields and the simulated initial metrics.
    pub fn new(fields: NewCampaign, metrics: InitialMetrics) -> Self {
        let NewCampaign {
            name,
            image_url,
            age_range,
            location,
            interests,
            ad_copy,
        } = fields;
        Self {
            id: Uuid::new_v4(),
            name,
            image_url,
            age_range,
            location,
            interests,
            ad_copy,
            status: metrics.status,
            date_created: Utc::now(),
            impressions: metrics.impressions,
            click_through_rate: metrics.click_through_rate,
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == CampaignStatus::Live
    }

    /// Short form of the id used in listings.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

impl User {
    /// Display name is the local part of the email address.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            email: email.to_string(),
            name,
        }
    }
}
