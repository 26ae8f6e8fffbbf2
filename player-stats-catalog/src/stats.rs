//! Summary figures shown above a roster view.

use crate::types::Player;

/// Headline numbers for the full roster and the currently visible subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterStats {
    pub total: usize,
    /// Mean rating across the full roster; 0.0 when empty.
    pub average_rating: f64,
    /// Highest rating in the full roster; 0 when empty.
    pub top_rating: u8,
    pub filtered: usize,
}

impl RosterStats {
    pub fn compute(roster: &[Player], filtered: &[Player]) -> Self {
        let total = roster.len();
        let sum: u64 = roster.iter().map(|p| u64::from(p.rating)).sum();
        let average_rating = if total == 0 {
            0.0
        } else {
            sum as f64 / total as f64
        };
        let top_rating = roster.iter().map(|p| p.rating).max().unwrap_or(0);

        Self {
            total,
            average_rating,
            top_rating,
            filtered: filtered.len(),
        }
    }
}

/// Display band for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RatingTier {
    Standard,
    Good,
    Excellent,
    Elite,
}

impl RatingTier {
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            90.. => Self::Elite,
            85..=89 => Self::Excellent,
            80..=84 => Self::Good,
            _ => Self::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Elite => "elite",
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Standard => "standard",
        }
    }
}
