//! In-memory state for a browsing session
//!
//! - `models`: Player, comment and favorite list records
//! - `roster`: The roster and its filtered view

pub mod models;
pub mod roster;


pub use models::*;
pub use roster::PlayerStore;
