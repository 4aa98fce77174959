//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{ContractFilter, ListId, MarketValueBucket, PlayerId};

use crate::filters::FilterCriteria;

/// Filter flags shared by the player listing commands.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive match on name, club, nationality or position.
    #[clap(long, short)]
    pub search: Option<String>,

    /// Exact league name.
    #[clap(long, short)]
    pub league: Option<String>,

    /// Exact club name.
    #[clap(long, short)]
    pub club: Option<String>,

    /// Exact position, e.g. `Centre-Forward`.
    #[clap(long, short)]
    pub position: Option<String>,

    /// Exact nationality.
    #[clap(long)]
    pub nationality: Option<String>,

    /// Preferred foot.
    #[clap(long)]
    pub foot: Option<String>,

    /// Percentile tier: elite (90+), high (70-89), medium (40-69), low (<40).
    #[clap(long, value_enum)]
    pub bucket: Option<MarketValueBucket>,

    /// Minimum market value in millions.
    #[clap(long)]
    pub min_value: Option<f64>,

    /// Maximum market value in millions.
    #[clap(long)]
    pub max_value: Option<f64>,

    #[clap(long)]
    pub min_age: Option<u32>,

    #[clap(long)]
    pub max_age: Option<u32>,

    /// Minimum height in cm.
    #[clap(long)]
    pub min_height: Option<u32>,

    /// Maximum height in cm.
    #[clap(long)]
    pub max_height: Option<u32>,

    /// `free` for free agents, or the contract expiry year (e.g. 2026).
    #[clap(long)]
    pub contract: Option<ContractFilter>,

    /// Only show favorite players.
    #[clap(long)]
    pub favorites: bool,
}

impl FilterArgs {
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search: self.search.unwrap_or_default(),
            league: self.league.unwrap_or_default(),
            club: self.club.unwrap_or_default(),
            position: self.position.unwrap_or_default(),
            nationality: self.nationality.unwrap_or_default(),
            foot: self.foot.unwrap_or_default(),
            market_value_bucket: self.bucket,
            min_market_value: self.min_value,
            max_market_value: self.max_value,
            min_age: self.min_age,
            max_age: self.max_age,
            min_height: self.min_height,
            max_height: self.max_height,
            contract: self.contract,
            favorites_only: self.favorites,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ListCmd {
    /// Print every favorite list, or the players of one list.
    Show {
        /// List ID; omit to print all lists.
        id: Option<ListId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Create a new list.
    Create {
        name: String,

        #[clap(long, short, default_value = "")]
        description: String,
    },

    /// Rename a list and/or change its description.
    Rename {
        id: ListId,

        /// New name; a blank name keeps the current one.
        #[clap(long, short)]
        name: Option<String>,

        /// New description; an empty value clears it.
        #[clap(long, short)]
        description: Option<String>,
    },

    /// Delete a list. The default list cannot be deleted.
    Delete { id: ListId },

    /// Add a player to a list.
    Add { id: ListId, player: PlayerId },

    /// Remove a player from a list.
    Remove { id: ListId, player: PlayerId },
}

#[derive(Debug, Parser)]
#[clap(name = "player-scout", about = "Browse, filter and shortlist football players")]
pub struct Scout {
    /// Backend base URL (or set `PLAYER_SCOUT_API_URL` env var).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Log requests and filter recomputation to stderr.
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List players matching the filters, highest percentile first.
    Players {
        #[clap(flatten)]
        filters: FilterArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print the active filters above the results.
        #[clap(long)]
        badges: bool,
    },

    /// Print the values available for each selector filter.
    Options {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player with comments and list memberships.
    Show {
        id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Toggle a player's favorite flag.
    Favorite { id: PlayerId },

    /// Add a comment to a player.
    Comment { id: PlayerId, text: String },

    /// Ask the backend to reload its player data.
    Refresh,

    /// Manage favorite lists.
    Lists {
        #[clap(subcommand)]
        cmd: ListCmd,
    },
}
