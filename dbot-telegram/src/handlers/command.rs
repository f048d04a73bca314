use dbot_core::{Bot, InlineButton, Message, Result};
use tracing::info;

use super::replies::{self, ButtonAction};

/// Menu keyboard sent with the welcome text: one row, one button per action.
pub fn menu_keyboard() -> Vec<Vec<InlineButton>> {
    vec![ButtonAction::ALL
        .into_iter()
        .map(|a| InlineButton::new(a.label(), a.as_data()))
        .collect()]
}

/// `/start`: greets the user and shows the menu.
pub async fn start(bot: &dyn Bot, message: &Message) -> Result<()> {
    info!(
        user_id = message.user.id,
        chat_id = message.chat.id,
        "Handling /start"
    );
    let text = replies::welcome(message.user.display_name().as_deref());
    bot.send_keyboard(&message.chat, &text, &menu_keyboard()).await
}
