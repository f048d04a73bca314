//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, CallbackQuery, Chat, InlineButton, Result};
use teloxide::{
    prelude::*,
    types::{CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup},
};

use crate::adapters::to_core_error;

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn to_markup(rows: &[Vec<InlineButton>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.data.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| to_core_error(&e))?;
        Ok(())
    }

    async fn send_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        rows: &[Vec<InlineButton>],
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(to_markup(rows))
            .await
            .map_err(|e| to_core_error(&e))?;
        Ok(())
    }

    async fn answer_callback(&self, query: &CallbackQuery, text: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .answer_callback_query(CallbackQueryId(query.id.clone()));
        if let Some(text) = text {
            request = request.text(text.to_string());
        }
        request.await.map_err(|e| to_core_error(&e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbot_core::{ErrorClass, User};

    /// Nothing listens on the discard port, so every request fails at the transport level.
    fn unreachable_adapter() -> TelegramBotAdapter {
        let url = reqwest::Url::parse("http://127.0.0.1:9/").unwrap();
        TelegramBotAdapter::new(teloxide::Bot::new("test_token").set_api_url(url))
    }

    fn query(id: &str) -> CallbackQuery {
        CallbackQuery {
            id: id.to_string(),
            user: User {
                id: 1,
                username: None,
                first_name: Some("Test".to_string()),
                last_name: None,
            },
            message: None,
            data: Some("info".to_string()),
        }
    }

    #[tokio::test]
    async fn test_answer_callback_reports_network_error() {
        let adapter = unreachable_adapter();

        let err = adapter.answer_callback(&query("cb_1"), None).await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::Network);

        let err = adapter
            .answer_callback(&query("cb_2"), Some("notice"))
            .await
            .unwrap_err();
        assert_eq!(err.class(), ErrorClass::Network);
    }

    #[tokio::test]
    async fn test_send_message_reports_network_error() {
        let adapter = unreachable_adapter();
        let chat = Chat {
            id: 42,
            chat_type: "private".to_string(),
        };

        let err = adapter.send_message(&chat, "hi").await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::Network);
    }

    #[test]
    fn test_to_markup_keeps_rows() {
        let rows = vec![
            vec![InlineButton::new("A", "a"), InlineButton::new("B", "b")],
            vec![InlineButton::new("C", "c")],
        ];
        let markup = to_markup(&rows);
        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[0][1].text, "B");
        assert_eq!(markup.inline_keyboard[1][0].text, "C");
    }
}
