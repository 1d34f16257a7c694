//! Management and inspection commands
//!
//! This module contains commands for managing the application:
//! configuration and the exclusion word list.

pub mod config;
pub mod exclusions;
