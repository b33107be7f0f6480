//! Ordered color palette. Each color is one time slot.

use serde::{Deserialize, Serialize};

/// Tokens of the default six-slot palette.
pub const DEFAULT_TOKENS: [&str; 6] = [
    "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#A133FF", "#FFC733",
];

/// 0-based position of a color in the palette.
///
/// Slots compare by palette order, which is also the greedy tie-break order
/// and the order of time offsets from the schedule start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot(pub usize);

impl Slot {
    pub fn index(self) -> usize {
        self.0
    }

    /// 1-based rank, as shown to users.
    pub fn rank(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rank())
    }
}

/// Fixed ordered sequence of distinct display tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    tokens: Vec<String>,
}

impl Palette {
    /// Build a palette. Emptiness and duplicates are checked by
    /// [`SchedulerConfig::validate`](crate::config::SchedulerConfig::validate).
    pub fn new(tokens: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { tokens: tokens.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, slot: Slot) -> Option<&str> {
        self.tokens.get(slot.0).map(String::as_str)
    }

    /// Slots in palette order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.tokens.len()).map(Slot)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// First token that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = hashbrown::HashSet::with_capacity(self.tokens.len());
        self.tokens
            .iter()
            .find(|t| !seen.insert(t.as_str()))
            .map(String::as_str)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_TOKENS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_has_six_distinct_tokens() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 6);
        assert_eq!(palette.first_duplicate(), None);
        assert_eq!(palette.token(Slot(0)), Some("#FF5733"));
        assert_eq!(palette.token(Slot(5)), Some("#FFC733"));
        assert_eq!(palette.token(Slot(6)), None);
    }

    #[test]
    fn test_slot_rank_is_one_based() {
        assert_eq!(Slot(0).rank(), 1);
        assert_eq!(Slot(3).to_string(), "4");
    }

    #[test]
    fn test_duplicate_detection() {
        let palette = Palette::new(["A", "B", "A"]);
        assert_eq!(palette.first_duplicate(), Some("A"));
    }

    #[test]
    fn test_palette_serializes_as_token_list() {
        let palette = Palette::new(["A", "B"]);
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
    }
}
