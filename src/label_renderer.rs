//! # Label Renderer Module
//!
//! Renders an [`OrderFields`] value onto a fixed 78mm × 50mm label, the
//! physical format of the operator's thermal printer. Two outputs share one
//! line-assembly step: a single-page PDF for chat delivery and an HTML page
//! for the print-page endpoint.
//!
//! Layout is a fixed vertical stack, one field per line, each prefixed with
//! its marker glyph, with a horizontal rule separating the identity block
//! from the payment/logistics block. The address line is dropped entirely
//! when the field is empty or carries the "not specified" placeholder, and
//! the following lines move up — no blank gap is left. Output is
//! deterministic: the same fields always render the same bytes.

use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use log::debug;

use crate::order_model::OrderFields;

// Label geometry, in millimetres of the physical label.
pub const LABEL_WIDTH_MM: f32 = 78.0;
pub const LABEL_HEIGHT_MM: f32 = 50.0;
pub const LINE_PITCH_MM: f32 = 5.0;
pub const LEFT_MARGIN_MM: f32 = 5.0;
// Baseline of the first line, measured from the bottom edge.
const FIRST_LINE_MM: f32 = 45.0;
const FONT_SIZE_PT: f32 = 10.0;
const RULE_WIDTH_PT: f32 = 0.5;

/// Filename of the delivered PDF document.
pub const PDF_FILENAME: &str = "label.pdf";

const MM_TO_PT: f32 = 72.0 / 25.4;

fn mm_to_pt(mm: f32) -> f32 {
    mm * MM_TO_PT
}

/// Assemble the printed lines: the identity block and the
/// payment/logistics block, in their fixed top-to-bottom order.
fn label_lines(fields: &OrderFields) -> (Vec<String>, Vec<String>) {
    let mut identity = vec![
        format!("👤 {}", fields.customer_name),
        format!("📞 {}", fields.phone),
    ];
    if !fields.location.is_empty() {
        identity.push(format!("📍 {}", fields.location));
    }
    if fields.has_address() {
        identity.push(format!("🏠 {}", fields.address));
    }

    let mut logistics = vec![format!("💰 ${}", fields.total_amount)];
    if !fields.shipping_method.is_empty() {
        logistics.push(format!("🚚 {}", fields.shipping_method));
    }
    logistics.push(format!("💳 {}", fields.payment_status));

    (identity, logistics)
}

fn push_text_ops(ops: &mut Vec<Operation>, y_mm: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec!["F1".into(), FONT_SIZE_PT.into()]));
    ops.push(Operation::new(
        "Td",
        vec![mm_to_pt(LEFT_MARGIN_MM).into(), mm_to_pt(y_mm).into()],
    ));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

/// Render the label as a single-page PDF document.
pub fn render_pdf(fields: &OrderFields) -> Result<Vec<u8>> {
    let (identity, logistics) = label_lines(fields);

    let mut ops: Vec<Operation> = Vec::new();
    let mut y = FIRST_LINE_MM;
    for line in &identity {
        push_text_ops(&mut ops, y, line);
        y -= LINE_PITCH_MM;
    }

    // Separator rule between the identity and payment/logistics blocks.
    let rule_y = mm_to_pt(y + LINE_PITCH_MM / 2.0);
    ops.push(Operation::new("w", vec![RULE_WIDTH_PT.into()]));
    ops.push(Operation::new(
        "m",
        vec![mm_to_pt(LEFT_MARGIN_MM).into(), rule_y.into()],
    ));
    ops.push(Operation::new(
        "l",
        vec![
            mm_to_pt(LABEL_WIDTH_MM - LEFT_MARGIN_MM).into(),
            rule_y.into(),
        ],
    ));
    ops.push(Operation::new("S", vec![]));

    for line in &logistics {
        push_text_ops(&mut ops, y, line);
        y -= LINE_PITCH_MM;
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });
    let content = Content { operations: ops };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                mm_to_pt(LABEL_WIDTH_MM).into(),
                mm_to_pt(LABEL_HEIGHT_MM).into(),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    debug!("rendered label PDF, {} bytes", buffer.len());
    Ok(buffer)
}

/// Render the label as an HTML page styled to the label's physical size.
pub fn render_html(fields: &OrderFields) -> String {
    let (identity, logistics) = label_lines(fields);

    let mut body = String::new();
    for line in &identity {
        body.push_str(&format!("    <div class=\"line\">{}</div>\n", escape_html(line)));
    }
    body.push_str("    <hr>\n");
    for line in &logistics {
        body.push_str(&format!("    <div class=\"line\">{}</div>\n", escape_html(line)));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>Shipping Label</title>\n\
           <style>\n\
             @page {{ size: {width}mm {height}mm; margin: 0; }}\n\
             body {{ width: {width}mm; height: {height}mm; margin: 0;\n\
                     padding-left: {margin}mm; box-sizing: border-box;\n\
                     font-family: Helvetica, Arial, sans-serif; font-size: {font}pt; }}\n\
             .line {{ height: {pitch}mm; line-height: {pitch}mm; }}\n\
             hr {{ border: none; border-top: {rule}pt solid #000;\n\
                   margin: 0 {margin}mm 0 0; }}\n\
           </style>\n\
         </head>\n\
         <body>\n\
         {body}</body>\n\
         </html>\n",
        width = LABEL_WIDTH_MM,
        height = LABEL_HEIGHT_MM,
        margin = LEFT_MARGIN_MM,
        pitch = LINE_PITCH_MM,
        font = FONT_SIZE_PT,
        rule = RULE_WIDTH_PT,
        body = body,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
