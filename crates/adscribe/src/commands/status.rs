use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AdScribeError, Result};
use crate::model::CampaignStatus;
use crate::store::backend::StorageBackend;
use crate::store::campaign_store::CampaignStore;

use super::helpers::resolve_id;

/// Set the status of one campaign.
pub fn run<B: StorageBackend>(
    store: &mut CampaignStore<B>,
    id: &str,
    new_status: CampaignStatus,
) -> Result<CmdResult> {
    let id = resolve_id(store, id)?;
    let current = store
        .get(&id)
        .map(|c| c.status)
        .ok_or_else(|| AdScribeError::CampaignNotFound(id.to_string()))?;

    let campaign = store.update_status(&id, new_status)?;

    let mut result = CmdResult::default();
    if current == new_status {
        result.add_message(CmdMessage::info(format!(
            "Campaign {} is already {}",
            campaign.name, new_status
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Campaign {} is now {}",
            campaign.name, new_status
        )));
    }
    result.affected_campaigns.push(campaign);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::test_utils::{fields, mem_store};

    #[test]
    fn test_switches_status() {
        let mut store = mem_store();
        let a = store.create(fields("A")).unwrap();
        let target = match a.status {
            CampaignStatus::Live => CampaignStatus::Pending,
            CampaignStatus::Pending => CampaignStatus::Live,
        };

        let result = run(&mut store, &a.id.to_string(), target).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.affected_campaigns[0].status, target);
        assert_eq!(store.get(&a.id).unwrap().status, target);
    }

    #[test]
    fn test_same_status_is_reported_not_failed() {
        let mut store = mem_store();
        let a = store.create(fields("A")).unwrap();
        let result = run(&mut store, &a.id.to_string(), a.status).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("already"));
        assert_eq!(store.get(&a.id), Some(&a));
    }

    #[test]
    fn test_unknown_campaign() {
        let mut store = mem_store();
        let err = run(&mut store, "nonexistent-id", CampaignStatus::Live).unwrap_err();
        assert!(matches!(err, AdScribeError::CampaignNotFound(_)));
    }
}
