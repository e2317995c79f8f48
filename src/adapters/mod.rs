//! Adapter implementations for port traits.
//!
//! - `live/` — Real encoder implementations

pub mod live;
