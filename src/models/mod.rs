pub mod game;

pub use game::*;

/// Title shown when the page has no recognizable heading.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Number of cheapest regions kept per game.
pub const TOP_PRICE_COUNT: usize = 3;
