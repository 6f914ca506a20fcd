use crate::error::{AdScribeError, Result};
use crate::store::backend::StorageBackend;
use crate::store::campaign_store::CampaignStore;
use uuid::Uuid;

/// Shortest prefix accepted when resolving a campaign id.
pub const MIN_ID_PREFIX: usize = 4;

/// Resolve user input to the id of an existing campaign.
///
/// Accepts a full UUID (any formatting `Uuid` parses) or an unambiguous
/// prefix of at least [`MIN_ID_PREFIX`] characters of the hyphenated or
/// simple form.
pub fn resolve_id<B: StorageBackend>(store: &CampaignStore<B>, input: &str) -> Result<Uuid> {
    let needle = input.trim().to_ascii_lowercase();

    if let Ok(id) = Uuid::parse_str(&needle) {
        return store
            .get(&id)
            .map(|c| c.id)
            .ok_or_else(|| AdScribeError::CampaignNotFound(input.to_string()));
    }

    if needle.len() < MIN_ID_PREFIX {
        return Err(AdScribeError::CampaignNotFound(input.to_string()));
    }

    let matches: Vec<Uuid> = store
        .list()
        .iter()
        .map(|c| c.id)
        .filter(|id| {
            id.hyphenated().to_string().starts_with(&needle)
                || id.simple().to_string().starts_with(&needle)
        })
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(AdScribeError::CampaignNotFound(input.to_string())),
        _ => Err(AdScribeError::Api(format!(
            "Id prefix '{}' matches {} campaigns, use more characters",
            input,
            matches.len()
        ))),
    }
}
