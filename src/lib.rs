pub mod api;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod messages;
pub mod paths;
pub mod tui;
pub mod view;
pub mod worker;

pub use lyrics::{extract, LYRICS_UNAVAILABLE};
