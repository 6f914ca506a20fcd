use crate::adcopy::{AdCopyClient, TextGenerator};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AdScribeError, Result};

/// Produce ad copy for a prospective campaign without storing anything.
pub fn run<G: TextGenerator>(
    copywriter: &AdCopyClient<G>,
    campaign_name: &str,
    interests: &[String],
) -> Result<CmdResult> {
    if campaign_name.trim().is_empty() || interests.is_empty() {
        return Err(AdScribeError::Validation(
            "please enter a campaign name and select at least one interest".to_string(),
        ));
    }

    let copy = copywriter.generate_ad_copy(campaign_name, interests);
    let mut result = CmdResult::default();
    if copy.is_fallback() {
        result.add_message(CmdMessage::warning(
            "Could not reach the text generator, using templated ad copy",
        ));
    }
    result.ad_copy = Some(copy);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adcopy::AdCopySource;
    use crate::test_utils::{CannedGenerator, OfflineGenerator};

    #[test]
    fn test_generated_copy() {
        let client = AdCopyClient::new(CannedGenerator("Headline: Yes".into()));
        let result = run(&client, "Acme", &["Gaming".to_string()]).unwrap();
        let copy = result.ad_copy.unwrap();
        assert_eq!(copy.source, AdCopySource::Generated);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_offline_generator_falls_back() {
        let client = AdCopyClient::new(OfflineGenerator);
        let result = run(&client, "Acme", &["Gaming".to_string()]).unwrap();
        let copy = result.ad_copy.unwrap();
        assert!(copy.text.contains("Acme"));
        assert!(copy.text.contains("Gaming"));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_requires_name_and_interest() {
        let client = AdCopyClient::new(OfflineGenerator);
        assert!(run(&client, " ", &["Gaming".to_string()]).is_err());
        assert!(run(&client, "Acme", &[]).is_err());
    }
}
