//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `message_handler`: Watches channel messages for order notifications
//! - `callback_handler`: Handles print button activations
//! - `ui_builder`: Builds the print affordance keyboards

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;
