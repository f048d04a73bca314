//! Core types: user, chat, message, callback query and the update envelope that wraps them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name to address the user by: first name, then `@username`.
    pub fn display_name(&self) -> Option<String> {
        self.first_name
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .or_else(|| self.username.as_ref().map(|u| format!("@{}", u)))
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for non-text messages.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn is_command(&self) -> bool {
        is_command(&self.content)
    }
}

/// Returns true when `text` is a bot command (`/name ...`).
pub fn is_command(text: &str) -> bool {
    text.starts_with('/')
}

/// Press on an inline keyboard button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub user: User,
    /// Message the keyboard was attached to; `None` when it is no longer accessible.
    pub message: Option<Message>,
    pub data: Option<String>,
}

/// One button of an inline keyboard: visible label and the callback data sent back on press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// What an update carries. Only the categories the bot handles are represented.
#[derive(Debug, Clone)]
pub enum UpdateKind {
    Message(Message),
    CallbackQuery(CallbackQuery),
}

/// A single inbound event delivered by the polling loop.
#[derive(Debug, Clone)]
pub struct Update {
    pub id: u32,
    pub kind: UpdateKind,
}

impl Update {
    pub fn message(id: u32, message: Message) -> Self {
        Self {
            id,
            kind: UpdateKind::Message(message),
        }
    }

    pub fn callback_query(id: u32, query: CallbackQuery) -> Self {
        Self {
            id,
            kind: UpdateKind::CallbackQuery(query),
        }
    }

    /// The message this update refers to, if any.
    pub fn effective_message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(m) => Some(m),
            UpdateKind::CallbackQuery(q) => q.message.as_ref(),
        }
    }

    pub fn effective_chat(&self) -> Option<&Chat> {
        self.effective_message().map(|m| &m.chat)
    }

    pub fn effective_user(&self) -> &User {
        match &self.kind {
            UpdateKind::Message(m) => &m.user,
            UpdateKind::CallbackQuery(q) => &q.user,
        }
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            UpdateKind::Message(_) => "message",
            UpdateKind::CallbackQuery(_) => "callback_query",
        };
        write!(f, "#{} ({}", self.id, kind)?;
        if let Some(chat) = self.effective_chat() {
            write!(f, ", chat {}", chat.id)?;
        }
        write!(f, ", user {})", self.effective_user().id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        }
    }

    fn message(text: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: user(),
            chat: Chat {
                id: 42,
                chat_type: "private".to_string(),
            },
            content: text.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_command() {
        assert!(is_command("/start"));
        assert!(is_command("/start@dbot payload"));
        assert!(!is_command("hello /start"));
        assert!(!is_command(""));
        assert!(message("/help").is_command());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut u = user();
        assert_eq!(u.display_name().as_deref(), Some("Alice"));
        u.first_name = Some("  ".to_string());
        assert_eq!(u.display_name().as_deref(), Some("@alice"));
        u.username = None;
        assert!(u.display_name().is_none());
    }

    #[test]
    fn test_effective_message_for_callback_without_message() {
        let update = Update::callback_query(
            5,
            CallbackQuery {
                id: "cb".to_string(),
                user: user(),
                message: None,
                data: Some("info".to_string()),
            },
        );
        assert!(update.effective_message().is_none());
        assert!(update.effective_chat().is_none());
        assert_eq!(update.effective_user().id, 7);
        assert_eq!(update.to_string(), "#5 (callback_query, user 7)");
    }

    #[test]
    fn test_effective_chat_for_message() {
        let update = Update::message(9, message("hi"));
        assert_eq!(update.effective_chat().map(|c| c.id), Some(42));
        assert_eq!(update.to_string(), "#9 (message, chat 42, user 7)");
    }
}
