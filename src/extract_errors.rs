//! # Extraction Error Types Module
//!
//! Failure outcomes of order-field extraction. The two variants carry the
//! logging contract with them: a message without the header is not an order
//! and stays quiet, a message with the header but a broken body is logged at
//! warning level and otherwise ignored.

/// Why a message did not produce an [`crate::order_model::OrderFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The header marker is absent; the message is not an order at all.
    NotAnOrder,
    /// The header is present but the named field's pattern did not match
    /// (or a required field captured nothing).
    MissingField(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::NotAnOrder => write!(f, "message does not carry the order header"),
            ExtractError::MissingField(name) => write!(f, "order field '{name}' not found"),
        }
    }
}

impl std::error::Error for ExtractError {}
