use dbot_core::{Bot, HandlerError, Message, Result};
use tracing::{debug, info};

use super::replies;

/// Plain text (non-command) messages get an acknowledgement echoing the text.
pub async fn handle_text_message(bot: &dyn Bot, message: &Message) -> Result<()> {
    if message.is_command() {
        debug!(chat_id = message.chat.id, "Command text reached text handler, ignoring");
        return Ok(());
    }
    let text = message.content.trim();
    if text.is_empty() {
        return Err(HandlerError::EmptyContent.into());
    }

    info!(
        user_id = message.user.id,
        chat_id = message.chat.id,
        message_content = %text,
        "Handling text message"
    );
    bot.reply_to(message, &replies::text_received(text)).await
}
