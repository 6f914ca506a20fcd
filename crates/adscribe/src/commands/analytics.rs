use crate::analytics::AnalyticsSummary;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::campaign_store::CampaignStore;

pub fn run<B: StorageBackend>(store: &CampaignStore<B>) -> Result<CmdResult> {
    let summary = AnalyticsSummary::from_campaigns(store.list());
    let mut result = CmdResult::default();
    if summary.is_empty() {
        result.add_message(CmdMessage::info(
            "No analytics data available. Create campaigns to start viewing analytics",
        ));
    }
    result.analytics = Some(summary);
    Ok(result)
}
