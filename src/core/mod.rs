//! Core functionality modules
//!
//! This module contains all core business logic organized into logical layers:
//! - `text`: Normalizing and masking lyrics
//! - `services`: External lyrics providers
//! - `quiz`: The lookup -> normalize -> mask pipeline

pub mod quiz;
pub mod services;
pub mod text;
