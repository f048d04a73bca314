//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Depends only on teloxide and dbot_core type definitions.

use dbot_core::{CallbackQuery, Chat, DbotError, Message, Update, User};
use teloxide::{ApiError, RequestError};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    pub fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
            created_at: self.0.date,
        }
    }
}

/// Wraps a teloxide CallbackQuery for conversion to core [`CallbackQuery`].
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> TelegramCallbackWrapper<'a> {
    /// Inaccessible source messages (too old, deleted) map to `message: None`.
    pub fn to_core(&self) -> CallbackQuery {
        CallbackQuery {
            id: self.0.id.to_string(),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            message: self
                .0
                .regular_message()
                .map(|m| TelegramMessageWrapper(m).to_core()),
            data: self.0.data.clone(),
        }
    }
}

pub fn message_update(update: &teloxide::types::Update, msg: &teloxide::types::Message) -> Update {
    Update::message(update.id.0, TelegramMessageWrapper(msg).to_core())
}

pub fn callback_update(
    update: &teloxide::types::Update,
    query: &teloxide::types::CallbackQuery,
) -> Update {
    Update::callback_query(update.id.0, TelegramCallbackWrapper(query).to_core())
}

/// Maps a teloxide request error onto [`DbotError`], keeping the network / conflict distinction.
pub fn to_core_error(error: &RequestError) -> DbotError {
    match error {
        RequestError::Network(e) => DbotError::Network(e.to_string()),
        RequestError::Io(e) => DbotError::Network(e.to_string()),
        RequestError::Api(ApiError::TerminatedByOtherGetUpdates) => {
            DbotError::Conflict(error.to_string())
        }
        RequestError::Api(e) => DbotError::Api(e.to_string()),
        other => DbotError::Bot(other.to_string()),
    }
}
