use super::backend::StorageBackend;
use super::PersistentStore;
use crate::error::{AdScribeError, Result};
use crate::metrics::{MetricsSource, SimulatedMetrics};
use crate::model::{Campaign, CampaignStatus, NewCampaign};
use uuid::Uuid;

/// What `load` found in persistent storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted collection replaced the in-memory one.
    Loaded(usize),
    /// Nothing persisted yet; the collection is empty.
    Empty,
    /// Persisted data could not be decoded; the collection was reset to empty.
    Recovered { reason: String },
}

/// The in-memory owner of the campaign collection.
///
/// The collection is ordered newest first and every mutation is written
/// through to the [`PersistentStore`] in full before the call returns. When
/// that write fails the mutation is undone, so memory never runs ahead of
/// what is on disk.
pub struct CampaignStore<B: StorageBackend> {
    persistence: PersistentStore<B>,
    metrics: Box<dyn MetricsSource>,
    campaigns: Vec<Campaign>,
}

impl<B: StorageBackend> CampaignStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_metrics(backend, Box::new(SimulatedMetrics::new()))
    }

    pub fn with_metrics(backend: B, metrics: Box<dyn MetricsSource>) -> Self {
        Self {
            persistence: PersistentStore::new(backend),
            metrics,
            campaigns: Vec::new(),
        }
    }

    pub fn persistence(&self) -> &PersistentStore<B> {
        &self.persistence
    }

    /// Hydrate the collection from persistent storage.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        match self.persistence.read_campaigns() {
            Ok(Some(campaigns)) => {
                let count = campaigns.len();
                self.campaigns = campaigns;
                tracing::debug!(count, "Loaded campaigns");
                Ok(LoadOutcome::Loaded(count))
            }
            Ok(None) => {
                self.campaigns.clear();
                Ok(LoadOutcome::Empty)
            }
            Err(AdScribeError::Parse { key, source }) => {
                tracing::warn!(
                    %key,
                    error = %source,
                    "Stored campaigns are unreadable, starting empty"
                );
                self.campaigns.clear();
                Ok(LoadOutcome::Recovered {
                    reason: format!("'{}' is not a valid campaign list: {}", key, source),
                })
            }
            Err(e) => Err(e),
        }
    }

    pub fn create(&mut self, fields: NewCampaign) -> Result<Campaign> {
        let campaign = Campaign::new(fields, self.metrics.initial_metrics());
        if self.get(&campaign.id).is_some() {
            return Err(AdScribeError::DuplicateId(campaign.id.to_string()));
        }

        self.campaigns.insert(0, campaign.clone());
        if let Err(e) = self.flush() {
            self.campaigns.remove(0);
            return Err(e);
        }

        tracing::debug!(id = %campaign.id, name = %campaign.name, "Created campaign");
        Ok(campaign)
    }

    /// Replace the status of one campaign, leaving every other field untouched.
    pub fn update_status(&mut self, id: &Uuid, status: CampaignStatus) -> Result<Campaign> {
        let pos = self
            .campaigns
            .iter()
            .position(|c| c.id == *id)
            .ok_or_else(|| AdScribeError::CampaignNotFound(id.to_string()))?;

        let previous = self.campaigns[pos].status;
        self.campaigns[pos].status = status;
        if let Err(e) = self.flush() {
            self.campaigns[pos].status = previous;
            return Err(e);
        }

        tracing::debug!(%id, from = %previous, to = %status, "Updated campaign status");
        Ok(self.campaigns[pos].clone())
    }

    pub fn get(&self, id: &Uuid) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == *id)
    }

    pub fn list(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    /// Drop every campaign, in memory and at rest.
    pub fn clear(&mut self) -> Result<()> {
        self.persistence.clear_campaigns()?;
        self.campaigns.clear();
        tracing::debug!("Cleared campaigns");
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.persistence.write_campaigns(&self.campaigns)
    }
}
