use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AdScribeError, Result};
use crate::store::backend::StorageBackend;
use crate::store::campaign_store::CampaignStore;

/// Remove every campaign. Requires explicit confirmation.
pub fn run<B: StorageBackend>(store: &mut CampaignStore<B>, confirmed: bool) -> Result<CmdResult> {
    if !confirmed {
        return Err(AdScribeError::Api(format!(
            "Refusing to remove {} campaigns without confirmation",
            store.len()
        )));
    }
    let removed = store.len();
    store.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Removed {} campaigns",
        removed
    )));
    Ok(result)
}
