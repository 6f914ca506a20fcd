//! # Command Layer
//!
//! This module contains the **core business logic** of adscribe. Each command
//! lives in its own submodule and implements plain Rust functions over the
//! campaign store.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Validate input before any mutation
//! - Operate on [`Campaign`] records through the [`CampaignStore`]
//! - Return structured [`CmdResult`] values with affected campaigns and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Testing Strategy
//!
//! Command tests run against [`MemBackend`](crate::store::mem_backend::MemBackend)
//! and scripted text generators, so no filesystem or network is touched.
//!
//! ## Command Modules
//!
//! - [`create`]: Create campaigns, generating ad copy when none is given
//! - [`generate`]: Produce ad copy without creating anything
//! - [`get`]: List/search campaigns and view one campaign
//! - [`status`]: Switch a campaign between Pending and Live
//! - [`analytics`]: Aggregate figures over all campaigns
//! - [`session`]: Login, logout and current user
//! - [`reset`]: Remove every campaign
//! - [`helpers`]: Shared utilities (id resolution)
//!
//! [`Campaign`]: crate::model::Campaign
//! [`CampaignStore`]: crate::store::campaign_store::CampaignStore

use crate::adcopy::AdCopy;
use crate::analytics::AnalyticsSummary;
use crate::model::{Campaign, User};
use serde::Serialize;

pub mod analytics;
pub mod create;
pub mod generate;
pub mod get;
pub mod helpers;
pub mod reset;
pub mod session;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Campaigns created or modified by the command.
    pub affected_campaigns: Vec<Campaign>,
    /// Campaigns to display, in list order.
    pub listed_campaigns: Vec<Campaign>,
    pub messages: Vec<CmdMessage>,
    pub analytics: Option<AnalyticsSummary>,
    pub user: Option<User>,
    pub ad_copy: Option<AdCopy>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_campaigns(mut self, campaigns: Vec<Campaign>) -> Self {
        self.listed_campaigns = campaigns;
        self
    }
}
