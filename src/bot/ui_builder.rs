//! UI Builder module for creating the print affordance keyboards

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use url::Url;

use crate::order_model::OrderFields;
use crate::payload::{self, PayloadError};

/// Label shown on the print button.
pub const PRINT_BUTTON_LABEL: &str = "🖨 Print Label";

/// Keyboard whose print button carries the complete field set as callback
/// data. Fails when a field value cannot be carried in the payload.
pub fn create_print_keyboard(fields: &OrderFields) -> Result<InlineKeyboardMarkup, PayloadError> {
    let data = payload::encode(fields)?;
    Ok(InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback(PRINT_BUTTON_LABEL, data),
    ]]))
}

/// Keyboard whose print button opens the HTML print page instead, with the
/// four page parameters query-encoded into the configured base URL.
pub fn create_print_url_keyboard(fields: &OrderFields, base: &Url) -> InlineKeyboardMarkup {
    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("name", &fields.customer_name)
        .append_pair("phone", &fields.phone)
        .append_pair("total", &fields.total_amount)
        .append_pair("payment", &fields.payment_status);
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        PRINT_BUTTON_LABEL,
        url,
    )]])
}
