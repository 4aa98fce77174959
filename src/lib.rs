//! Player Scout Library
//!
//! A client for a football player scouting backend: fetch the roster, filter and
//! rank it client-side, and keep favorite lists and per-player comments in sync
//! with the backend.
//!
//! ## Features
//!
//! - **Filtering**: search, exact selectors, percentile tiers, market value, age,
//!   height and contract ranges, favorites only
//! - **Ranking**: visible players are always ordered by percentile, highest first
//! - **Favorite Lists**: named player lists; the `default` list mirrors each
//!   player's favorite flag
//! - **Comments**: per-player notes in the backend's order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use player_scout::{ApiClient, FilterCriteria, MarketValueBucket, Session};
//!
//! # async fn example() -> player_scout::Result<()> {
//! let mut session = Session::new(ApiClient::new("http://127.0.0.1:5000")?);
//! session.load_players().await?;
//!
//! session.set_criteria(FilterCriteria {
//!     league: "LaLiga".to_string(),
//!     market_value_bucket: Some(MarketValueBucket::Elite),
//!     ..FilterCriteria::default()
//! });
//! for player in session.visible() {
//!     println!("{} {}", player.name, player.percentile);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PLAYER_SCOUT_API_URL=http://127.0.0.1:5000
//! export PLAYER_SCOUT_TIMEOUT_SECS=30
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod comments;
pub mod core;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use api::ApiClient;
pub use cli::types::{ContractFilter, ListId, MarketValueBucket, PlayerId};
pub use comments::CommentLog;
pub use error::{Result, ScoutError};
pub use favorites::FavoriteListManager;
pub use filters::FilterCriteria;
pub use session::Session;
pub use store::{Comment, FavoriteList, Player, PlayerStore};

pub const API_URL_ENV_VAR: &str = "PLAYER_SCOUT_API_URL";
pub const TIMEOUT_ENV_VAR: &str = "PLAYER_SCOUT_TIMEOUT_SECS";
