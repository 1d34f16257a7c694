//! External services integration
//!
//! This module contains integrations with external lyrics providers:
//! - `LyricsSource` trait and the lookup result types
//! - Genius API client with song page scraping

pub mod genius;
pub mod source;

pub use genius::GeniusClient;
pub use source::{FoundLyrics, LookupOutcome, LookupRequest, LyricsSource};
