//! Static content module
//!
//! Read-only quote, tip and reel catalogs plus the mood-based quote lookup.

pub mod catalog;
pub mod mood;

// Re-export main functions
pub use catalog::*;
pub use mood::generate_mood_quote;
