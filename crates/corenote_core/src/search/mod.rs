//! Note search entry points.
//!
//! # Responsibility
//! - Turn search-box input into a query.
//! - Keep display ordering rules (pinned first) in one place.

pub mod filter;
