//! The hard-coded data backing the browse deck, the matches list and the
//! chat opener. Bundled as JSON and parsed once on first use.

use crate::common;

use common::ChatMessage;
use common::Origin;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static BROWSE_PROFILES: Lazy<Vec<BrowseProfile>> = Lazy::new(|| {
    let s = include_str!("../../files/profiles.json");
    serde_json::from_str(s).unwrap()
});

pub static MATCHES: Lazy<Vec<MatchEntry>> = Lazy::new(|| {
    let s = include_str!("../../files/matches.json");
    serde_json::from_str(s).unwrap()
});

static CONVERSATION_OPENER: Lazy<Vec<SeedMessage>> = Lazy::new(|| {
    let s = include_str!("../../files/conversation.json");
    serde_json::from_str(s).unwrap()
});

/// A candidate shown in the browse deck.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrowseProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub bio: String,
    pub location: String,
    pub interests: Vec<String>,
    pub photo: String,
}

/// A confirmed match shown in the matches grid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchEntry {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub tagline: String,
    pub photo: String,
    pub matched_at: String,
    #[serde(default)]
    pub new_match: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct SeedMessage {
    origin: Origin,
    content: String,
    stamp: String,
}

pub fn match_by_id(id: &str) -> Option<&'static MatchEntry> {
    MATCHES.iter().find(|entry| entry.id == id)
}

/// The preloaded transcript every chat screen starts from.
pub fn opener_messages() -> Vec<ChatMessage> {
    CONVERSATION_OPENER
        .iter()
        .map(|seed| ChatMessage::new(seed.origin, seed.content.clone(), seed.stamp.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_profiles_parse() {
        assert!(BROWSE_PROFILES.len() >= 3);
        for profile in BROWSE_PROFILES.iter() {
            assert!(!profile.name.is_empty());
            assert!(!profile.interests.is_empty());
        }
    }

    #[test]
    fn bundled_matches_parse_with_unique_ids() {
        assert!(MATCHES.len() >= 6);

        let mut ids: Vec<&str> = MATCHES.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MATCHES.len());
    }

    #[test]
    fn match_lookup_resolves_known_ids_only() {
        assert_eq!(match_by_id("1").unwrap().name, "Nimali");
        assert!(match_by_id("no-such-id").is_none());
    }

    #[test]
    fn chat_opener_alternates_between_both_sides() {
        let opener = opener_messages();
        assert_eq!(opener.len(), 5);
        assert!(opener.iter().any(|m| m.origin == Origin::Match));
        assert!(opener.iter().any(|m| m.origin == Origin::Me));
    }
}
