//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `update`: Reduces Telegram messages and callback queries to `BotUpdate`
//! - `messenger`: Sends replies back to Telegram
//! - `ui_builder`: Creates keyboards and formats captions
//! - `handlers`: One handler per conversation state
//! - `state_dispatcher`: Routes updates to handlers and persists state

pub mod handlers;
pub mod messenger;
pub mod state_dispatcher;
pub mod ui_builder;
pub mod update;

// Re-export the types main.rs wires together
pub use messenger::{Messenger, TelegramMessenger};
pub use state_dispatcher::StateDispatcher;
pub use update::BotUpdate;
