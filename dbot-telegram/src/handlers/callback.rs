use dbot_core::{Bot, CallbackQuery, HandlerError, Result};
use tracing::{info, warn};

use super::replies::{self, ButtonAction};

/// Menu button presses. Every path answers the callback exactly once so the client spinner stops.
pub async fn handle_button(bot: &dyn Bot, query: &CallbackQuery) -> Result<()> {
    let Some(data) = query.data.as_deref() else {
        bot.answer_callback(query, None).await?;
        return Err(HandlerError::InvalidCommand("callback query without data".to_string()).into());
    };

    let Some(action) = ButtonAction::from_data(data) else {
        warn!(user_id = query.user.id, data = %data, "Unknown button data");
        return bot.answer_callback(query, Some(replies::UNKNOWN_OPTION)).await;
    };

    info!(user_id = query.user.id, action = ?action, "Handling button");
    match &query.message {
        Some(message) => {
            bot.answer_callback(query, None).await?;
            bot.send_message(&message.chat, action.reply()).await
        }
        // Source message is gone; the notice is the only place left to show the reply.
        None => bot.answer_callback(query, Some(action.reply())).await,
    }
}
