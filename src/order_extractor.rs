//! # Order Extractor Module
//!
//! Turns a semi-structured chat order message into an
//! [`OrderFields`](crate::order_model::OrderFields) value using
//! delimiter-anchored patterns.
//!
//! ## Features
//!
//! - Declarative template: an ordered list of [`FieldSpec`] entries drives a
//!   single generic extraction routine, so a new message layout is
//!   configuration rather than a new code path
//! - Header gate: a message without the template's header marker is not an
//!   order and is reported as such without log noise
//! - All-or-nothing matching: if any required field fails to match, no
//!   fields are returned at all
//! - Amount capture follows a currency-digit grammar (digits, grouping
//!   commas, optional decimal point); the `$` sign is not part of the value
//! - Payment status only matches a closed set of literal phrases

use lazy_static::lazy_static;
use log::{debug, info, warn};
use regex::Regex;
use std::collections::HashMap;

use crate::extract_errors::ExtractError;
use crate::order_model::OrderFields;

/// Canonical field names the extraction routine maps onto [`OrderFields`].
pub const FIELD_CUSTOMER_NAME: &str = "customer_name";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_TOTAL_AMOUNT: &str = "total_amount";
pub const FIELD_PAYMENT_STATUS: &str = "payment_status";
pub const FIELD_SHIPPING_METHOD: &str = "shipping_method";

/// Header marker of the default order template. A message that does not
/// contain this substring is ignored entirely.
pub const ORDER_HEADER: &str = "✅សូមបងពិនិត្យ";

/// Closed set of payment status phrases accepted by the default template.
/// Any other text on the status line fails the whole extraction; this
/// strictness is part of the contract, not an accident.
pub const PAYMENT_STATUSES: [&str; 5] =
    ["ប្រើប្រាស់", "បង់ប្រាក់", "មិនទាន់បង់", "paid", "unpaid"];

// Currency-digit grammar shared by every Amount field.
const AMOUNT_GRAMMAR: &str = r"[0-9][0-9,]*(?:\.[0-9]+)?";

/// How a field's value is recognised after its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text following the marker.
    Line,
    /// A `$`-prefixed amount; the captured value excludes the `$`.
    Amount,
    /// A whole line made of an optional 🟩/🟥 glyph and one phrase from the
    /// template's closed status set. No marker token is used.
    Status,
}

/// How far a [`FieldKind::Line`] capture extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSpan {
    /// Up to the end of the marker's line.
    SingleLine,
    /// Across lines, up to the next blank line or the end of the message.
    Paragraph,
}

/// One entry of an order template.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Canonical field name, one of the `FIELD_*` constants.
    pub name: String,
    /// Literal marker anchoring the field, e.g. an emoji-prefixed label.
    /// Unused for [`FieldKind::Status`].
    pub marker: String,
    /// Required fields fail the whole extraction when absent or empty.
    pub required: bool,
    pub span: FieldSpan,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A required single-line free-text field.
    pub fn line(name: &str, marker: &str) -> Self {
        Self {
            name: name.to_string(),
            marker: marker.to_string(),
            required: true,
            span: FieldSpan::SingleLine,
            kind: FieldKind::Line,
        }
    }

    /// An optional single-line free-text field.
    pub fn optional_line(name: &str, marker: &str) -> Self {
        Self {
            required: false,
            ..Self::line(name, marker)
        }
    }

    /// A required `$`-amount field.
    pub fn amount(name: &str, marker: &str) -> Self {
        Self {
            kind: FieldKind::Amount,
            ..Self::line(name, marker)
        }
    }

    /// The closed-set payment status line.
    pub fn status(name: &str) -> Self {
        Self {
            kind: FieldKind::Status,
            ..Self::line(name, "")
        }
    }
}

/// A complete message template: header, status phrases, field table.
#[derive(Debug, Clone)]
pub struct OrderTemplate {
    pub header: String,
    pub payment_statuses: Vec<String>,
    pub fields: Vec<FieldSpec>,
}

impl Default for OrderTemplate {
    /// The Khmer shop-order template this bot was built for.
    fn default() -> Self {
        Self {
            header: ORDER_HEADER.to_string(),
            payment_statuses: PAYMENT_STATUSES.iter().map(|s| s.to_string()).collect(),
            fields: vec![
                FieldSpec::line(FIELD_CUSTOMER_NAME, "👤 អតិថិជន:"),
                FieldSpec::line(FIELD_PHONE, "📞 លេខទូរស័ព្ទ:"),
                FieldSpec::line(FIELD_LOCATION, "📍 ទីតាំង:"),
                FieldSpec::optional_line(FIELD_ADDRESS, "🏠 អាសយដ្ឋាន:"),
                FieldSpec::amount(FIELD_TOTAL_AMOUNT, "សរុបចុងក្រោយ:"),
                FieldSpec::status(FIELD_PAYMENT_STATUS),
                FieldSpec::line(FIELD_SHIPPING_METHOD, "🚚 វិធីសាស្រ្តដឹកជញ្ជូន:"),
            ],
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledField {
    spec: FieldSpec,
    pattern: Regex,
}

/// Order extractor holding the compiled patterns of one template.
#[derive(Debug, Clone)]
pub struct OrderExtractor {
    header: String,
    fields: Vec<CompiledField>,
}

lazy_static! {
    static ref DEFAULT_EXTRACTOR: OrderExtractor =
        OrderExtractor::with_template(&OrderTemplate::default())
            .expect("default order template should compile");
}

impl OrderExtractor {
    /// Create an extractor for the default Khmer order template.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderlabel::order_extractor::OrderExtractor;
    /// use orderlabel::extract_errors::ExtractError;
    ///
    /// let extractor = OrderExtractor::new();
    /// assert_eq!(
    ///     extractor.extract("hello there"),
    ///     Err(ExtractError::NotAnOrder)
    /// );
    /// ```
    pub fn new() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }

    /// Compile an extractor for a custom template.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderlabel::order_extractor::{FieldSpec, OrderExtractor, OrderTemplate};
    ///
    /// let template = OrderTemplate {
    ///     header: "NEW ORDER".to_string(),
    ///     payment_statuses: vec!["paid".to_string(), "unpaid".to_string()],
    ///     fields: vec![
    ///         FieldSpec::line("customer_name", "Name:"),
    ///         FieldSpec::line("phone", "Phone:"),
    ///         FieldSpec::amount("total_amount", "Total:"),
    ///         FieldSpec::status("payment_status"),
    ///         FieldSpec::line("shipping_method", "Ship:"),
    ///     ],
    /// };
    /// let extractor = OrderExtractor::with_template(&template)?;
    /// # Ok::<(), regex::Error>(())
    /// ```
    pub fn with_template(template: &OrderTemplate) -> Result<Self, regex::Error> {
        let mut fields = Vec::with_capacity(template.fields.len());
        for spec in &template.fields {
            let pattern = Regex::new(&Self::field_pattern(spec, &template.payment_statuses))?;
            fields.push(CompiledField {
                spec: spec.clone(),
                pattern,
            });
        }
        debug!(
            "compiled order template with {} field patterns",
            fields.len()
        );
        Ok(Self {
            header: template.header.clone(),
            fields,
        })
    }

    fn field_pattern(spec: &FieldSpec, statuses: &[String]) -> String {
        let marker = regex::escape(&spec.marker);
        match spec.kind {
            FieldKind::Line => match spec.span {
                FieldSpan::SingleLine => format!(r"{marker}[ \t]*([^\r\n]*)"),
                FieldSpan::Paragraph => {
                    format!(r"(?s){marker}[ \t]*(.*?)(?:\n[ \t]*\n|\z)")
                }
            },
            FieldKind::Amount => {
                format!(r"{marker}[ \t]*\$[ \t]*({AMOUNT_GRAMMAR})")
            }
            FieldKind::Status => {
                let phrases = statuses
                    .iter()
                    .map(|s| regex::escape(s))
                    .collect::<Vec<_>>()
                    .join("|");
                format!(r"(?m)^[ \t]*((?:[🟩🟥][ \t]*)?(?:{phrases}))[ \t]*\r?$")
            }
        }
    }

    /// Extract a complete field set from a message.
    ///
    /// Every field pattern is anchored on its marker and captured verbatim,
    /// trimmed of surrounding whitespace. A message without the header is
    /// [`ExtractError::NotAnOrder`]; a message whose header is present but
    /// where any required field fails to match (or captures nothing) is
    /// [`ExtractError::MissingField`] and produces no partial result.
    pub fn extract(&self, text: &str) -> Result<OrderFields, ExtractError> {
        if !text.contains(&self.header) {
            debug!("message does not contain the order header; ignoring");
            return Err(ExtractError::NotAnOrder);
        }

        let mut values: HashMap<String, String> = HashMap::new();
        for field in &self.fields {
            let captured = field
                .pattern
                .captures(text)
                .map(|c| c[1].trim().to_string());
            match captured {
                Some(value) if !value.is_empty() || !field.spec.required => {
                    values.insert(field.spec.name.clone(), value);
                }
                _ if field.spec.required => {
                    warn!("pattern for '{}' not found in message", field.spec.name);
                    return Err(ExtractError::MissingField(field.spec.name.clone()));
                }
                _ => {
                    values.insert(field.spec.name.clone(), String::new());
                }
            }
        }

        let mut take = |name: &str| values.remove(name).unwrap_or_default();
        let fields = OrderFields {
            customer_name: take(FIELD_CUSTOMER_NAME),
            phone: take(FIELD_PHONE),
            location: take(FIELD_LOCATION),
            address: take(FIELD_ADDRESS),
            total_amount: take(FIELD_TOTAL_AMOUNT),
            payment_status: take(FIELD_PAYMENT_STATUS),
            shipping_method: take(FIELD_SHIPPING_METHOD),
        };
        info!("successfully extracted all order fields");
        Ok(fields)
    }
}

impl Default for OrderExtractor {
    fn default() -> Self {
        Self::new()
    }
}
