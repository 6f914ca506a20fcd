//! Fixed option lists offered when creating a campaign.
//!
//! Interests are stored by label ("Food & Cooking"), not by id ("food").
//! Unknown input passes through unchanged so custom interests still work.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
}

const fn entry(id: &'static str, label: &'static str) -> CatalogEntry {
    CatalogEntry { id, label }
}

pub const INTERESTS: &[CatalogEntry] = &[
    entry("tech", "Tech"),
    entry("fashion", "Fashion"),
    entry("fitness", "Fitness"),
    entry("food", "Food & Cooking"),
    entry("travel", "Travel"),
    entry("finance", "Finance"),
    entry("gaming", "Gaming"),
    entry("beauty", "Beauty"),
];

pub const AGE_RANGES: &[CatalogEntry] = &[
    entry("18-25", "18-25"),
    entry("26-35", "26-35"),
    entry("36-50", "36-50"),
    entry("50+", "50+"),
];

pub const LOCATIONS: &[CatalogEntry] = &[
    entry("USA", "United States"),
    entry("UK", "United Kingdom"),
    entry("UAE", "United Arab Emirates"),
    entry("India", "India"),
];

fn lookup<'a>(entries: &'a [CatalogEntry], id: &str) -> Option<&'a CatalogEntry> {
    entries.iter().find(|e| e.id.eq_ignore_ascii_case(id.trim()))
}

/// Map an interest id to its stored label.
pub fn interest_label(id: &str) -> String {
    lookup(INTERESTS, id)
        .map(|e| e.label.to_string())
        .unwrap_or_else(|| id.to_string())
}

pub fn interest_labels<I: AsRef<str>>(ids: &[I]) -> Vec<String> {
    ids.iter().map(|id| interest_label(id.as_ref())).collect()
}

pub fn is_age_range(id: &str) -> bool {
    lookup(AGE_RANGES, id).is_some()
}

/// Display name of a location id, e.g. `UAE` → `United Arab Emirates`.
pub fn location_name(id: &str) -> String {
    lookup(LOCATIONS, id)
        .map(|e| e.label.to_string())
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_interest_ids_map_to_labels() {
        assert_eq!(interest_label("food"), "Food & Cooking");
        assert_eq!(interest_label("Tech"), "Tech");
        assert_eq!(
            interest_labels(&["gaming", "beauty"]),
            vec!["Gaming", "Beauty"]
        );
    }

    #[test]
    fn test_unknown_interest_passes_through() {
        assert_eq!(interest_label("Knitting"), "Knitting");
    }

    #[test]
    fn test_location_names() {
        assert_eq!(location_name("uae"), "United Arab Emirates");
        assert_eq!(location_name("Mars"), "Mars");
    }

    #[test]
    fn test_age_ranges_come_from_the_catalog() {
        assert!(is_age_range("26-35"));
        assert!(is_age_range("50+"));
        assert!(!is_age_range("banana"));
        assert!(!is_age_range(""));
    }
}
