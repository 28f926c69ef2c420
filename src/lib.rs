// Core layer - configuration and shared utilities
pub mod core;

// Twitch layer - typed Helix API client and the stream lookup flow
pub mod twitch;

// Application layer - slash command definitions, handlers, and dispatch
pub mod commands;

// Re-export core config for convenience
pub use core::Config;

// Re-export command infrastructure
pub use commands::{CommandContext, CommandRegistry, SlashCommandHandler};
