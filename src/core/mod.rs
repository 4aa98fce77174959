//! Core utilities for the player scouting client
//!
//! This module consolidates helpers used across the application:
//! - `http`: Default request headers and base URL handling
//! - `market_value`: Parsing of market value display strings

pub mod http;
pub mod market_value;

// Re-export commonly used items for convenience
pub use http::{default_header_map, normalize_base_url, USER_AGENT};
pub use market_value::parse_market_value;
