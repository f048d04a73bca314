//! Error boundary for handler and polling failures.
//!
//! [`handle_error`] notifies the originating chat (when there is one) and logs the error by class.
//! It never returns an error; failures inside it are logged as "Error in error handler".

use std::sync::Arc;

use dbot_core::{Bot, DbotError, ErrorClass, Result, Update};
use futures::future::BoxFuture;
use teloxide::{error_handlers::ErrorHandler, RequestError};
use tracing::error;

use crate::adapters::to_core_error;
use crate::handlers::replies;

/// Handles `error` raised while processing `update` (or by the polling loop when `update` is `None`).
/// Returns the class of `error` so callers and tests can tell which branch was logged.
pub async fn handle_error(bot: &dyn Bot, update: Option<&Update>, error: &DbotError) -> ErrorClass {
    let class = error.class();
    if let Err(e) = report(bot, update, error, class).await {
        error!(error = %e, "Error in error handler: {}", e);
    }
    class
}

async fn report(
    bot: &dyn Bot,
    update: Option<&Update>,
    error: &DbotError,
    class: ErrorClass,
) -> Result<()> {
    let error_message = match update {
        Some(update) => {
            if let Some(message) = update.effective_message() {
                bot.reply_to(message, replies::FAILURE).await?;
            }
            format!("Error while handling update {}", update)
        }
        None => "Error with no update".to_string(),
    };

    error!(update_id = update.map(|u| u.id), "{}: {}", error_message, error);

    match class {
        ErrorClass::Network => error!("Network error occurred: {}", error),
        ErrorClass::Conflict => error!("Conflict error: Another instance of the bot is running"),
        ErrorClass::Other => {}
    }
    Ok(())
}

/// Receives update-listener errors (failed `getUpdates`, conflicts) and routes them through [`handle_error`].
pub struct PollingErrorHandler {
    bot: Arc<dyn Bot>,
}

impl PollingErrorHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Arc<Self> {
        Arc::new(Self { bot })
    }
}

impl ErrorHandler<RequestError> for PollingErrorHandler {
    fn handle_error(self: Arc<Self>, error: RequestError) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            let error = to_core_error(&error);
            handle_error(self.bot.as_ref(), None, &error).await;
        })
    }
}
