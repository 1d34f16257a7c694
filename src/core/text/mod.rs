//! Lyrics text processing
//!
//! - `normalizer`: strips provider boilerplate from raw lyrics
//! - `exclusions`: the set of words that are never masked
//! - `masker`: tokenizes lyrics and hides sampled words behind `[n]` markers

pub mod exclusions;
pub mod masker;
pub mod normalizer;

pub use exclusions::{parse_word_list, ExclusionSet};
pub use masker::{mask_words, MaskMode};
pub use normalizer::normalize;
