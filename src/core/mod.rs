//! # Core Module
//!
//! Configuration and shared utilities for the trinket bot.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add duration module with approximate elapsed-time rendering
//! - 1.0.0: Initial creation with config and response modules

pub mod config;
pub mod duration;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use duration::humanize_elapsed;
pub use response::{
    truncate_embed_description, truncate_embed_title, EMBED_DESCRIPTION_LIMIT, EMBED_TITLE_LIMIT,
};
