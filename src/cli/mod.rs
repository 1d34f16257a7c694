//! Command Line Interface module
//!
//! This module contains all CLI commands organized into logical submodules:
//! - `core`: Building quizzes (quiz, mask)
//! - `management`: Configuration and inspection (config, exclusions)

pub mod core;
pub mod management;

// Re-export all commands for convenience
pub use self::core::*;
pub use self::management::*;
