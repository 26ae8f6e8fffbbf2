//! CLI type definitions: command enums and argument structs.

use clap::{Args, Parser, Subcommand};

pub(crate) const DEFAULT_API: &str = "http://localhost:3000/api";

#[derive(Parser)]
#[command(name = "player-stats")]
#[command(about = "Browse and manage the player roster", long_about = None)]
pub(crate) struct Cli {
    /// Base URL of the Player Stats API
    #[arg(long, global = true, env = "PLAYER_STATS_API", default_value = DEFAULT_API)]
    pub api: String,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Roster filters, applied locally after fetching the full list.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive text matched against name and club
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact position code, or "all"
    #[arg(short, long, default_value = "all")]
    pub position: String,

    /// Minimum rating (inclusive)
    #[arg(short, long, default_value_t = 0)]
    pub min_rating: u32,

    /// Exact nation, or "all"
    #[arg(short, long, default_value = "all")]
    pub nation: String,
}

/// Every field of a new player.
#[derive(Args, Clone, Debug)]
pub(crate) struct NewPlayerArgs {
    #[arg(long)]
    pub name: String,

    /// Position code (e.g., GK, CB, ST)
    #[arg(long)]
    pub position: String,

    /// Overall rating, 1-99
    #[arg(long)]
    pub rating: i64,

    #[arg(long)]
    pub club: String,

    #[arg(long)]
    pub nation: String,
}

/// Fields to change on an existing player. Omitted fields keep their value.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct EditPlayerArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub position: Option<String>,

    #[arg(long)]
    pub rating: Option<i64>,

    #[arg(long)]
    pub club: Option<String>,

    #[arg(long)]
    pub nation: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List players, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show the position and nation values present in the roster
    Options,

    /// Show a single player
    Show {
        /// Player id
        id: i64,
    },

    /// Add a new player
    Add {
        #[command(flatten)]
        player: NewPlayerArgs,
    },

    /// Change fields of an existing player
    Edit {
        /// Player id
        id: i64,

        #[command(flatten)]
        changes: EditPlayerArgs,
    },

    /// Remove a player
    Remove {
        /// Player id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Check that the API is reachable
    Health,
}
