//! Roster filter engine.
//!
//! Filtering is a pure derivation: given the full roster and a
//! [`FilterSpec`], produce the visible subset. The engine keeps no state and
//! never touches the input, so callers simply re-run it whenever the roster
//! or the filter changes.

use std::collections::HashSet;

use crate::types::Player;

/// A categorical filter choice: everything, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parse a user-supplied choice. Empty input and `all` (any case) mean
    /// [`Selection::All`].
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// The combination of predicates applied to the roster.
///
/// The default filter has every predicate inactive and keeps the whole roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against name or club. Inactive when empty.
    pub search_text: String,
    pub position: Selection,
    /// Inclusive lower bound on rating. Inactive when zero.
    pub min_rating: u32,
    pub nation: Selection,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Selection::Only(position.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: u32) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_nation(mut self, nation: impl Into<String>) -> Self {
        self.nation = Selection::Only(nation.into());
        self
    }

    /// True when no predicate is active.
    pub fn is_identity(&self) -> bool {
        self.search_text.is_empty()
            && self.position.is_all()
            && self.min_rating == 0
            && self.nation.is_all()
    }

    pub fn matches_position(&self, player: &Player) -> bool {
        self.position.accepts(&player.position)
    }

    pub fn matches_rating(&self, player: &Player) -> bool {
        self.min_rating == 0 || u32::from(player.rating) >= self.min_rating
    }

    pub fn matches_nation(&self, player: &Player) -> bool {
        self.nation.accepts(&player.nation)
    }

    pub fn matches_search(&self, player: &Player) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        player.name.to_lowercase().contains(&needle)
            || player.club.to_lowercase().contains(&needle)
    }

    /// Conjunction of every active predicate.
    pub fn matches(&self, player: &Player) -> bool {
        self.matches_position(player)
            && self.matches_rating(player)
            && self.matches_nation(player)
            && self.matches_search(player)
    }
}

/// Produce the visible subset of `roster`, preserving roster order.
pub fn filter_roster(roster: &[Player], spec: &FilterSpec) -> Vec<Player> {
    roster
        .iter()
        .filter(|player| spec.matches(player))
        .cloned()
        .collect()
}

/// Distinct positions present in the roster, in first-seen order.
pub fn position_options(roster: &[Player]) -> Vec<String> {
    distinct(roster.iter().map(|p| p.position.as_str()))
}

/// Distinct nations present in the roster, in first-seen order.
pub fn nation_options(roster: &[Player]) -> Vec<String> {
    distinct(roster.iter().map(|p| p.nation.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
