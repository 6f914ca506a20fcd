use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::CampaignFilter;
use crate::store::backend::StorageBackend;
use crate::store::campaign_store::CampaignStore;

use super::helpers::resolve_id;

/// List campaigns matching `filter`, newest first.
pub fn list<B: StorageBackend>(store: &CampaignStore<B>, filter: &CampaignFilter) -> Result<CmdResult> {
    let all = store.list();
    let listed: Vec<_> = filter.apply(all).into_iter().cloned().collect();

    let mut result = CmdResult::default();
    if all.is_empty() {
        result.add_message(CmdMessage::info(
            "No campaigns yet. Create your first campaign to get started",
        ));
    } else if !filter.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} campaigns",
            listed.len(),
            all.len()
        )));
    }
    Ok(result.with_listed_campaigns(listed))
}

/// Look up one campaign by full id or unambiguous prefix.
pub fn view<B: StorageBackend>(store: &CampaignStore<B>, id: &str) -> Result<CmdResult> {
    let id = resolve_id(store, id)?;
    let listed = store.get(&id).cloned().into_iter().collect();
    Ok(CmdResult::default().with_listed_campaigns(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdScribeError;
    use crate::model::CampaignStatus;
    use crate::test_utils::{fields, mem_store};

    #[test]
    fn test_list_empty_store() {
        let store = mem_store();
        let result = list(&store, &CampaignFilter::default()).unwrap();
        assert!(result.listed_campaigns.is_empty());
        assert!(result.messages[0].content.starts_with("No campaigns yet"));
    }

    #[test]
    fn test_list_returns_newest_first() {
        let mut store = mem_store();
        store.create(fields("First")).unwrap();
        store.create(fields("Second")).unwrap();
        let result = list(&store, &CampaignFilter::default()).unwrap();
        let names: Vec<_> = result.listed_campaigns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_filtered_list_reports_counts() {
        let mut store = mem_store();
        store.create(fields("Winter Deals")).unwrap();
        store.create(fields("Summer Sale")).unwrap();
        let result = list(&store, &CampaignFilter::search("summer")).unwrap();
        assert_eq!(result.listed_campaigns.len(), 1);
        assert_eq!(result.messages[0].content, "Showing 1 of 2 campaigns");
    }

    #[test]
    fn test_list_does_not_mutate_store() {
        let mut store = mem_store();
        let a = store.create(fields("A")).unwrap();
        let writes = store.persistence().backend().write_count();
        list(&store, &CampaignFilter::default().with_status(CampaignStatus::Live)).unwrap();
        assert_eq!(store.persistence().backend().write_count(), writes);
        assert_eq!(store.get(&a.id), Some(&a));
    }

    #[test]
    fn test_view_by_prefix() {
        let mut store = mem_store();
        let a = store.create(fields("A")).unwrap();
        store.create(fields("B")).unwrap();
        let result = view(&store, &a.short_id()).unwrap();
        assert_eq!(result.listed_campaigns, vec![a]);
    }

    #[test]
    fn test_view_unknown_id() {
        let store = mem_store();
        assert!(matches!(
            view(&store, "nonexistent-id"),
            Err(AdScribeError::CampaignNotFound(_))
        ));
    }
}
