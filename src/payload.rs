//! # Affordance Payload Module
//!
//! Serializes an [`OrderFields`] value into the print-button callback data
//! and back. The schema is versioned and fixed:
//!
//! ```text
//! print|v1|customer_name|phone|location|address|total_amount|shipping_method|payment_status
//! ```
//!
//! Nine `|`-separated parts: the action tag, the schema version, then the
//! seven field values in that order. A field value containing the delimiter
//! cannot be encoded — the collision is rejected up front instead of letting
//! a later decode misalign fields.

use crate::order_model::OrderFields;

/// Action tag identifying print-button payloads among callback data.
pub const ACTION_PRINT: &str = "print";
/// Current payload schema version.
pub const PAYLOAD_VERSION: &str = "v1";

const DELIMITER: char = '|';
const PART_COUNT: usize = 9;

/// Failure to encode or decode an affordance payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// A field value contains the payload delimiter and cannot be carried.
    DelimiterInField(String),
    /// The payload does not carry the print action tag.
    UnknownAction(String),
    /// The payload declares a schema version this build does not speak.
    UnknownVersion(String),
    /// The payload does not split into the expected number of parts.
    WrongPartCount(usize),
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::DelimiterInField(name) => {
                write!(f, "field '{name}' contains the payload delimiter")
            }
            PayloadError::UnknownAction(tag) => write!(f, "unknown payload action '{tag}'"),
            PayloadError::UnknownVersion(v) => write!(f, "unknown payload version '{v}'"),
            PayloadError::WrongPartCount(n) => {
                write!(f, "payload has {n} parts, expected {PART_COUNT}")
            }
        }
    }
}

impl std::error::Error for PayloadError {}

/// Whether a callback payload belongs to this codec at all.
pub fn is_print_payload(payload: &str) -> bool {
    payload == ACTION_PRINT || payload.starts_with(&format!("{ACTION_PRINT}{DELIMITER}"))
}

/// Encode a field set into callback data.
pub fn encode(fields: &OrderFields) -> Result<String, PayloadError> {
    let parts = [
        ("customer_name", &fields.customer_name),
        ("phone", &fields.phone),
        ("location", &fields.location),
        ("address", &fields.address),
        ("total_amount", &fields.total_amount),
        ("shipping_method", &fields.shipping_method),
        ("payment_status", &fields.payment_status),
    ];
    for (name, value) in &parts {
        if value.contains(DELIMITER) {
            return Err(PayloadError::DelimiterInField(name.to_string()));
        }
    }
    let mut payload = format!("{ACTION_PRINT}{DELIMITER}{PAYLOAD_VERSION}");
    for (_, value) in &parts {
        payload.push(DELIMITER);
        payload.push_str(value);
    }
    Ok(payload)
}

/// Decode callback data back into the field set it was encoded from.
pub fn decode(payload: &str) -> Result<OrderFields, PayloadError> {
    let parts: Vec<&str> = payload.split(DELIMITER).collect();
    if parts[0] != ACTION_PRINT {
        return Err(PayloadError::UnknownAction(parts[0].to_string()));
    }
    if parts.len() != PART_COUNT {
        return Err(PayloadError::WrongPartCount(parts.len()));
    }
    if parts[1] != PAYLOAD_VERSION {
        return Err(PayloadError::UnknownVersion(parts[1].to_string()));
    }
    Ok(OrderFields {
        customer_name: parts[2].to_string(),
        phone: parts[3].to_string(),
        location: parts[4].to_string(),
        address: parts[5].to_string(),
        total_amount: parts[6].to_string(),
        shipping_method: parts[7].to_string(),
        payment_status: parts[8].to_string(),
    })
}
