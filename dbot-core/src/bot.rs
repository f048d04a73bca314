//! Bot abstraction for outbound replies.
//!
//! [`Bot`] is transport-agnostic; `dbot-telegram` implements it over teloxide and tests substitute a recording mock.

use crate::error::Result;
use crate::types::{CallbackQuery, Chat, InlineButton, Message};
use async_trait::async_trait;

/// Outbound side of the bot. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends a text message with an inline keyboard, one inner `Vec` per row.
    async fn send_keyboard(&self, chat: &Chat, text: &str, rows: &[Vec<InlineButton>])
        -> Result<()>;

    /// Acknowledges a button press. `text`, when set, is shown to the user as a short notice.
    async fn answer_callback(&self, query: &CallbackQuery, text: Option<&str>) -> Result<()>;
}
