//! Update handlers. Each is a stateless function over [`dbot_core::Bot`]; routing lives in the dispatcher.

mod callback;
mod command;
mod message;
pub mod replies;

pub use callback::handle_button;
pub use command::{menu_keyboard, start};
pub use message::handle_text_message;
pub use replies::ButtonAction;
