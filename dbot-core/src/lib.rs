//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Update`], message / callback types, [`DbotError`]
//! with its [`ErrorClass`], and tracing initialization. Transport-agnostic; used by dbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, ErrorClass, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    is_command, CallbackQuery, Chat, InlineButton, Message, Update, UpdateKind, User,
};
