//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every adscribe operation, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the campaign store, the ad-copy client and the authenticator
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation**: no stdout, stderr, or formatting
//! - **Session enforcement**: callers decide which operations need
//!   [`AdScribeApi::require_session`]
//!
//! ## Generic Over Backends
//!
//! `AdScribeApi<B, G>` is generic over the storage backend and the text
//! generator:
//! - Production: `AdScribeApi<FsBackend, OllamaClient>`
//! - Testing: `AdScribeApi<MemBackend, _>` with a scripted generator

use crate::adcopy::{AdCopyClient, TextGenerator};
use crate::auth::{Authenticator, Credentials, MockAuthenticator};
use crate::commands;
use crate::error::{AdScribeError, Result};
use crate::metrics::MetricsSource;
use crate::model::{CampaignStatus, User};
use crate::query::CampaignFilter;
use crate::store::backend::StorageBackend;
use crate::store::campaign_store::{CampaignStore, LoadOutcome};

pub struct AdScribeApi<B: StorageBackend, G: TextGenerator> {
    store: CampaignStore<B>,
    copywriter: AdCopyClient<G>,
    authenticator: Box<dyn Authenticator>,
}

impl<B: StorageBackend, G: TextGenerator> AdScribeApi<B, G> {
    /// Build an API with simulated metrics and the mock authenticator.
    pub fn new(backend: B, generator: G) -> Self {
        Self::from_parts(
            CampaignStore::new(backend),
            AdCopyClient::new(generator),
            Box::new(MockAuthenticator),
        )
    }

    pub fn from_parts(
        store: CampaignStore<B>,
        copywriter: AdCopyClient<G>,
        authenticator: Box<dyn Authenticator>,
    ) -> Self {
        Self {
            store,
            copywriter,
            authenticator,
        }
    }

    pub fn with_metrics(backend: B, generator: G, metrics: Box<dyn MetricsSource>) -> Self {
        Self::from_parts(
            CampaignStore::with_metrics(backend, metrics),
            AdCopyClient::new(generator),
            Box::new(MockAuthenticator),
        )
    }

    pub fn store(&self) -> &CampaignStore<B> {
        &self.store
    }

    /// Hydrate campaigns from storage. Call once before anything else.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        self.store.load()
    }

    pub fn login(&self, email: &str, password: &str) -> Result<commands::CmdResult> {
        commands::session::login(
            self.store.persistence(),
            self.authenticator.as_ref(),
            &Credentials::new(email, password),
        )
    }

    pub fn logout(&self) -> Result<commands::CmdResult> {
        commands::session::logout(self.store.persistence())
    }

    pub fn current_user(&self) -> Result<commands::CmdResult> {
        commands::session::current_user(self.store.persistence())
    }

    /// The logged-in user, or an auth error when there is none.
    pub fn require_session(&self) -> Result<User> {
        self.current_user()?
            .user
            .ok_or_else(|| AdScribeError::Auth("Please log in first".to_string()))
    }

    pub fn create_campaign(
        &mut self,
        draft: commands::create::CampaignDraft,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &self.copywriter, draft)
    }

    pub fn generate_ad_copy(
        &self,
        campaign_name: &str,
        interests: &[String],
    ) -> Result<commands::CmdResult> {
        commands::generate::run(&self.copywriter, campaign_name, interests)
    }

    pub fn list_campaigns(&self, filter: &CampaignFilter) -> Result<commands::CmdResult> {
        commands::get::list(&self.store, filter)
    }

    pub fn view_campaign(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::view(&self.store, id)
    }

    pub fn set_status(&mut self, id: &str, status: CampaignStatus) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, id, status)
    }

    pub fn analytics(&self) -> Result<commands::CmdResult> {
        commands::analytics::run(&self.store)
    }

    pub fn reset(&mut self, confirmed: bool) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store, confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create::CampaignDraft;
    use crate::metrics::SimulatedMetrics;
    use crate::store::fs_backend::FsBackend;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::{CannedGenerator, OfflineGenerator, TestEnv};

    fn draft(name: &str) -> CampaignDraft {
        CampaignDraft {
            name: name.into(),
            image_url: "https://example.com/a.png".into(),
            age_range: "36-50".into(),
            location: "Canada".into(),
            interests: vec!["Sports".into()],
            ad_copy: None,
        }
    }

    fn mem_api() -> AdScribeApi<MemBackend, OfflineGenerator> {
        AdScribeApi::with_metrics(
            MemBackend::new(),
            OfflineGenerator,
            Box::new(SimulatedMetrics::seeded(3)),
        )
    }

    #[test]
    fn test_require_session() {
        let api = mem_api();
        assert!(matches!(
            api.require_session(),
            Err(AdScribeError::Auth(_))
        ));
        api.login("lee@example.com", "pw").unwrap();
        assert_eq!(api.require_session().unwrap().name, "lee");
        api.logout().unwrap();
        assert!(api.require_session().is_err());
    }

    #[test]
    fn test_create_then_list_and_view() {
        let mut api = mem_api();
        let created = api.create_campaign(draft("Playoffs")).unwrap();
        let campaign = created.affected_campaigns[0].clone();
        assert!(campaign.ad_copy.contains("Playoffs"));

        let listed = api.list_campaigns(&CampaignFilter::default()).unwrap();
        assert_eq!(listed.listed_campaigns, vec![campaign.clone()]);

        let viewed = api.view_campaign(&campaign.short_id()).unwrap();
        assert_eq!(viewed.listed_campaigns[0].id, campaign.id);
    }

    #[test]
    fn test_set_status_and_analytics() {
        let mut api = mem_api();
        let id = api.create_campaign(draft("A")).unwrap().affected_campaigns[0].id;
        api.set_status(&id.to_string(), CampaignStatus::Live).unwrap();
        let summary = api.analytics().unwrap().analytics.unwrap();
        assert_eq!(summary.live_campaigns, 1);
    }

    #[test]
    fn test_generate_uses_generator() {
        let api = AdScribeApi::new(MemBackend::new(), CannedGenerator("Headline: Go".into()));
        let copy = api
            .generate_ad_copy("A", &["Sports".to_string()])
            .unwrap()
            .ad_copy
            .unwrap();
        assert_eq!(copy.text, "Headline: Go");
    }

    #[test]
    fn test_state_survives_restart_on_disk() {
        let env = TestEnv::new();
        {
            let mut api = AdScribeApi::new(env.backend.clone(), OfflineGenerator);
            api.load().unwrap();
            api.login("kim@example.com", "pw").unwrap();
            api.create_campaign(draft("Persisted")).unwrap();
        }

        let mut api = AdScribeApi::new(FsBackend::new(env.root.clone()), OfflineGenerator);
        assert_eq!(api.load().unwrap(), LoadOutcome::Loaded(1));
        assert_eq!(api.store().list()[0].name, "Persisted");
        assert_eq!(api.require_session().unwrap().email, "kim@example.com");
    }

    #[test]
    fn test_reset() {
        let mut api = mem_api();
        api.create_campaign(draft("A")).unwrap();
        assert!(api.reset(false).is_err());
        api.reset(true).unwrap();
        assert!(api.store().is_empty());
    }
}
