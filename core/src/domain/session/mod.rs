//! Client-side search-session state: the suggestion list, the accumulated
//! exclusion set, the mirrored favorites list, and the optimistic-update
//! machinery that keeps them consistent across unreliable network calls.
//!
//! This module is pure state with no ports; the embedding client drives it
//! around its own network layer.

pub mod entities;
pub mod services;

pub use entities::*;
