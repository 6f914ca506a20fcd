use crate::adcopy::{GenerationError, TextGenerator};
use crate::metrics::SimulatedMetrics;
use crate::model::NewCampaign;
use crate::store::campaign_store::CampaignStore;
use crate::store::fs_backend::FsBackend;
use crate::store::mem_backend::MemBackend;
use std::cell::Cell;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub backend: FsBackend,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let backend = FsBackend::new(root.clone());
        Self {
            _temp_dir: temp_dir,
            backend,
            root,
        }
    }
}

pub fn fields(name: &str) -> NewCampaign {
    NewCampaign {
        name: name.to_string(),
        image_url: "https://example.com/banner.png".to_string(),
        age_range: "26-35".to_string(),
        location: "USA".to_string(),
        interests: vec!["Tech".to_string(), "Fashion".to_string()],
        ad_copy: format!("Headline: {}", name),
    }
}

pub fn mem_store() -> CampaignStore<MemBackend> {
    CampaignStore::with_metrics(MemBackend::new(), Box::new(SimulatedMetrics::seeded(5)))
}

/// Generator that behaves like an unreachable server.
pub struct OfflineGenerator;

impl TextGenerator for OfflineGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Transport("connection refused".to_string()))
    }
}

/// Generator that always answers with the same text.
pub struct CannedGenerator(pub String);

impl TextGenerator for CannedGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.0.clone())
    }
}

/// Generator that counts how often it is asked for text.
#[derive(Default)]
pub struct CountingGenerator {
    calls: Cell<usize>,
}

impl CountingGenerator {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TextGenerator for CountingGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.set(self.calls.get() + 1);
        Ok("Headline: Counted".to_string())
    }
}
