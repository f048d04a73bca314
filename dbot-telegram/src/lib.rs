//! # dbot-telegram
//!
//! Telegram layer over teloxide: config, type adapters, [`dbot_core::Bot`] implementation, the `/start`,
//! text and button handlers, the error handler and the polling dispatcher.

mod adapters;
mod bot_adapter;
mod config;
mod dispatcher;
mod error_handler;
pub mod handlers;

pub use adapters::{
    callback_update, message_update, to_core_error, TelegramCallbackWrapper,
    TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{log_file_from_env, TelegramConfig, DEFAULT_LOG_FILE};
pub use dispatcher::{run, schema, Command};
pub use error_handler::{handle_error, PollingErrorHandler};
