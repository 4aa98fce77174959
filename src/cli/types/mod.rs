//! Type-safe wrappers and enums shared by the CLI and the library.

pub mod filters;
pub mod ids;

pub use filters::{ContractFilter, MarketValueBucket, FREE_AGENT};
pub use ids::{ListId, PlayerId, DEFAULT_LIST_ID};
