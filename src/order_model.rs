//! # Order Model Module
//!
//! Defines the order data extracted from a chat notification message.
//! An `OrderFields` value only ever exists fully populated: the extractor
//! either fills every field it promises or produces nothing.

use serde::{Deserialize, Serialize};

/// Literal the order template uses when the sender left the address blank.
pub const ADDRESS_NOT_SPECIFIED: &str = "(មិនបានបញ្ជាក់)";

/// A complete set of order fields extracted from one message.
///
/// Values are verbatim substrings of the source message, trimmed of
/// surrounding whitespace. No normalization is applied: the phone number is
/// not checked for digit count and the amount keeps its original grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFields {
    pub customer_name: String,
    pub phone: String,
    /// Delivery town/area. Empty when the message variant carries none.
    pub location: String,
    /// Street address. Empty or [`ADDRESS_NOT_SPECIFIED`] when not given.
    pub address: String,
    /// Amount as captured, without the `$` prefix (e.g. "25.00", "12,000").
    pub total_amount: String,
    /// The full status line, including its 🟩/🟥 glyph when present.
    pub payment_status: String,
    pub shipping_method: String,
}

impl OrderFields {
    /// Whether the label should carry an address line at all.
    pub fn has_address(&self) -> bool {
        !self.address.is_empty() && self.address != ADDRESS_NOT_SPECIFIED
    }
}
