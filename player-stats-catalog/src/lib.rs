//! Player data model and the roster filter engine.
//!
//! This crate defines the player record types without any database or
//! network dependencies. The filter engine, option-set derivation and roster
//! statistics are pure functions over an in-memory roster, so any front end
//! (terminal, web, tests) can recompute its view whenever the roster or the
//! filter changes.

pub mod filter;
pub mod stats;
pub mod types;

pub use filter::{FilterSpec, Selection, filter_roster, nation_options, position_options};
pub use stats::{RatingTier, RosterStats};
pub use types::*;
