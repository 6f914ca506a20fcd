use crate::adcopy::{AdCopyClient, TextGenerator};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewCampaign;
use crate::store::backend::StorageBackend;
use crate::store::campaign_store::CampaignStore;
use crate::validation::{validate_campaign_details, validate_new_campaign};

/// Creator input where the ad copy may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignDraft {
    pub name: String,
    pub image_url: String,
    pub age_range: String,
    pub location: String,
    pub interests: Vec<String>,
    pub ad_copy: Option<String>,
}

impl CampaignDraft {
    fn into_fields(self, ad_copy: String) -> NewCampaign {
        NewCampaign {
            name: self.name,
            image_url: self.image_url,
            age_range: self.age_range,
            location: self.location,
            interests: self.interests,
            ad_copy,
        }
    }
}

pub fn run<B: StorageBackend, G: TextGenerator>(
    store: &mut CampaignStore<B>,
    copywriter: &AdCopyClient<G>,
    mut draft: CampaignDraft,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let given_copy = draft.ad_copy.take().filter(|c| !c.trim().is_empty());
    let mut fields = draft.into_fields(given_copy.clone().unwrap_or_default());
    validate_campaign_details(&fields)?;

    if given_copy.is_none() {
        let copy = copywriter.generate_ad_copy(&fields.name, &fields.interests);
        if copy.is_fallback() {
            result.add_message(CmdMessage::warning(
                "Text generation unavailable, using templated ad copy",
            ));
        } else {
            result.add_message(CmdMessage::info("Ad copy generated"));
        }
        fields.ad_copy = copy.text;
    }
    validate_new_campaign(&fields)?;

    let campaign = store.create(fields)?;
    result.add_message(CmdMessage::success(format!(
        "Campaign created: {}",
        campaign.name
    )));
    result.affected_campaigns.push(campaign);
    Ok(result)
}
