//! Field checks applied before a campaign is created.
//!
//! The store accepts whatever it is given; these checks run at the API
//! boundary so a rejected campaign never reaches it.

use url::Url;

use crate::catalog::{is_age_range, AGE_RANGES};
use crate::error::{AdScribeError, Result};
use crate::model::NewCampaign;

pub fn validate_new_campaign(fields: &NewCampaign) -> Result<()> {
    validate_fields(fields, true)
}

/// Every check except the ad copy, run before any copy is generated.
pub fn validate_campaign_details(fields: &NewCampaign) -> Result<()> {
    validate_fields(fields, false)
}

fn validate_fields(fields: &NewCampaign, require_ad_copy: bool) -> Result<()> {
    let mut missing = Vec::new();
    for (label, value) in [
        ("name", &fields.name),
        ("image URL", &fields.image_url),
        ("age range", &fields.age_range),
        ("location", &fields.location),
    ] {
        if value.trim().is_empty() {
            missing.push(label);
        }
    }
    if fields.interests.is_empty() {
        missing.push("interests");
    }
    if require_ad_copy && fields.ad_copy.trim().is_empty() {
        missing.push("ad copy");
    }
    if !missing.is_empty() {
        return Err(AdScribeError::Validation(format!(
            "please fill in {}",
            missing.join(", ")
        )));
    }

    if fields.interests.iter().any(|i| i.trim().is_empty()) {
        return Err(AdScribeError::Validation(
            "interest labels cannot be blank".to_string(),
        ));
    }

    if !is_age_range(&fields.age_range) {
        let known: Vec<_> = AGE_RANGES.iter().map(|e| e.id).collect();
        return Err(AdScribeError::Validation(format!(
            "age range '{}' must be one of {}",
            fields.age_range,
            known.join(", ")
        )));
    }

    validate_image_url(&fields.image_url)
}

fn validate_image_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        AdScribeError::Validation(format!("image URL '{}' is not a valid URL: {}", raw, e))
    })?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(()),
        _ => Err(AdScribeError::Validation(format!(
            "image URL '{}' must be an http(s) address",
            raw
        ))),
    }
}
