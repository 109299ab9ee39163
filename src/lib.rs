//! # Order Label Telegram Bot
//!
//! A Telegram bot that extracts structured order fields from chat
//! notification messages and renders them onto a 78mm × 50mm printable
//! label, delivered as a PDF document in the chat or as an HTML print page.

pub mod bot;
pub mod extract_errors;
pub mod http_server;
pub mod label_renderer;
pub mod order_extractor;
pub mod order_model;
pub mod payload;
