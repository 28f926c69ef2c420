//! # Twitch Module
//!
//! Typed Twitch Helix API client and the streamer lookup flow behind
//! the /twitch command.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial implementation (client, typed schemas, lookup flow)

pub mod client;
pub mod lookup;
pub mod models;

pub use client::TwitchClient;
pub use lookup::{lookup, LookupOutcome};
pub use models::{BroadcastSnapshot, HelixGame, HelixResponse, HelixStream, HelixUser};
