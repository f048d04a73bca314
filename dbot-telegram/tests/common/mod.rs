//! Shared test doubles: a recording [`MockBot`], core type builders and a log capture writer.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot, CallbackQuery, Chat, DbotError, InlineButton, Message, Result, User};
use tracing_subscriber::fmt::MakeWriter;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Keyboard { chat_id: i64, text: String, rows: Vec<Vec<InlineButton>> },
    CallbackAnswer { query_id: String, text: Option<String> },
}

/// Mock Bot that records every call. With `failing()`, every call errors instead.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    failing: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, call: Sent) -> Result<()> {
        if self.failing {
            return Err(DbotError::Bot("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(call);
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        rows: &[Vec<InlineButton>],
    ) -> Result<()> {
        self.record(Sent::Keyboard {
            chat_id: chat.id,
            text: text.to_string(),
            rows: rows.to_vec(),
        })
    }

    async fn answer_callback(&self, query: &CallbackQuery, text: Option<&str>) -> Result<()> {
        self.record(Sent::CallbackAnswer {
            query_id: query.id.clone(),
            text: text.map(str::to_string),
        })
    }
}

pub const CHAT_ID: i64 = 456;

pub fn test_user() -> User {
    User {
        id: 123,
        username: Some("test_user".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

pub fn test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        user: test_user(),
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

pub fn test_callback(data: Option<&str>, with_message: bool) -> CallbackQuery {
    CallbackQuery {
        id: "cb_1".to_string(),
        user: test_user(),
        message: with_message.then(|| test_message("menu")),
        data: data.map(str::to_string),
    }
}

/// In-memory writer for tracing output.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes tracing output on the current thread into a [`LogCapture`] until the guard drops.
/// Works with `#[tokio::test]`, whose runtime is single-threaded.
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
