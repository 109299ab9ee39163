//! Callback Handler module for processing print button activations

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::InputFile;
use tracing::{debug, error, warn};

use crate::label_renderer;
use crate::payload;

/// Handle a print button activation: decode the payload, render the label
/// and deliver it to the chat as a document.
pub async fn callback_handler(bot: Bot, q: CallbackQuery) -> Result<()> {
    let data = q.data.as_deref().unwrap_or("");
    if !payload::is_print_payload(data) {
        // Some other affordance's callback; not ours to answer.
        return Ok(());
    }
    debug!(user_id = %q.from.id, "Received print button activation");

    let fields = match payload::decode(data) {
        Ok(fields) => fields,
        Err(e) => {
            warn!(user_id = %q.from.id, error = %e, "Print payload failed to decode");
            answer(&bot, &q, "⚠️ This print button is no longer valid.").await;
            return Ok(());
        }
    };

    let Some(msg) = &q.message else {
        warn!(user_id = %q.from.id, "Print activation without a reachable source message");
        answer(&bot, &q, "⚠️ Label could not be delivered.").await;
        return Ok(());
    };

    match label_renderer::render_pdf(&fields) {
        Ok(bytes) => {
            let document = InputFile::memory(bytes).file_name(label_renderer::PDF_FILENAME);
            match bot.send_document(msg.chat().id, document).await {
                // The acknowledgment must only follow a completed delivery
                // call; answering first would show "done" on a label the
                // user may never receive.
                Ok(_) => answer(&bot, &q, "✅ Label generated!").await,
                Err(e) => {
                    error!(user_id = %q.from.id, error = %e, "Failed to deliver label document");
                    answer(&bot, &q, "⚠️ Label could not be delivered, please retry.").await;
                }
            }
        }
        Err(e) => {
            // A decoded field set is complete by construction; failing to
            // render it is a bug in the renderer, not a user mistake.
            error!(user_id = %q.from.id, error = %e, "Label rendering failed");
            answer(&bot, &q, "⚠️ Label could not be generated.").await;
        }
    }

    Ok(())
}

// Best-effort acknowledgment so the button never shows a stuck spinner.
async fn answer(bot: &Bot, q: &CallbackQuery, text: &str) {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).text(text).await {
        error!(user_id = %q.from.id, error = %e, "Failed to acknowledge print activation");
    }
}
