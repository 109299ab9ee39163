//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, error, warn};

use crate::extract_errors::ExtractError;
use crate::order_extractor::OrderExtractor;

use super::ui_builder;

static ORDER_EXTRACTOR: std::sync::LazyLock<OrderExtractor> =
    std::sync::LazyLock::new(OrderExtractor::new);

// When PRINT_PAGE_URL is set, the print button opens the HTML print page
// instead of triggering the PDF callback flow.
static PRINT_PAGE_URL: std::sync::LazyLock<Option<url::Url>> = std::sync::LazyLock::new(|| {
    let raw = std::env::var("PRINT_PAGE_URL").ok()?;
    match url::Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            error!(error = %e, "Invalid PRINT_PAGE_URL, falling back to callback buttons");
            None
        }
    }
});

/// Watch channel traffic for order notifications and attach a print button
/// to every message that parses as a complete order.
pub async fn message_handler(bot: Bot, msg: Message) -> Result<()> {
    // Order notifications are posted by the shop's order service; messages
    // typed by people are never extraction candidates.
    let from_service = msg.from.as_ref().map(|user| user.is_bot).unwrap_or(false);
    if !from_service {
        return Ok(());
    }

    let Some(text) = msg.text() else {
        return Ok(());
    };
    debug!(chat_id = %msg.chat.id, message_length = text.len(), "Received service message");

    match ORDER_EXTRACTOR.extract(text) {
        Ok(fields) => {
            let markup = match PRINT_PAGE_URL.as_ref() {
                Some(base) => ui_builder::create_print_url_keyboard(&fields, base),
                None => match ui_builder::create_print_keyboard(&fields) {
                    Ok(markup) => markup,
                    Err(e) => {
                        warn!(chat_id = %msg.chat.id, error = %e, "Order fields cannot be carried in a payload; no print button attached");
                        return Ok(());
                    }
                },
            };
            if let Err(e) = bot
                .edit_message_reply_markup(msg.chat.id, msg.id)
                .reply_markup(markup)
                .await
            {
                error!(chat_id = %msg.chat.id, error = %e, "Failed to attach print button");
            }
        }
        Err(ExtractError::NotAnOrder) => {
            debug!(chat_id = %msg.chat.id, "Message is not an order; ignoring");
        }
        Err(e) => {
            warn!(chat_id = %msg.chat.id, error = %e, "Order message did not match the template; no print button attached");
        }
    }

    Ok(())
}
