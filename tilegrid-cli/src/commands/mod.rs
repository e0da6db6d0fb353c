//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`locate`] - Region containing a point
//! - [`center`] - Bounds and center of a tile
//! - [`cover`] - All regions under an area
//! - [`overlap`] - Overlap and containment checks
//! - [`config`] - Configuration management (get, set, list, path)

pub mod center;
pub mod common;
pub mod config;
pub mod cover;
pub mod locate;
pub mod overlap;
