//! Dispatcher wiring: routes `/start`, plain text and button callbacks to the handlers, and runs long polling.
//! Endpoints convert teloxide types to core types; handler errors go through [`handle_error`] and are not
//! propagated to teloxide. Polling errors go through [`PollingErrorHandler`].

use std::sync::Arc;

use anyhow::Result;
use dbot_core::{is_command, Bot as CoreBot, DbotError};
use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
    types::{CallbackQuery, Message, Update},
    update_listeners::Polling,
    utils::command::BotCommands,
};
use tracing::{debug, info, instrument};

use crate::adapters::{callback_update, message_update};
use crate::bot_adapter::TelegramBotAdapter;
use crate::config::TelegramConfig;
use crate::error_handler::{handle_error, PollingErrorHandler};
use crate::handlers;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show the main menu.")]
    Start,
}

/// The update routing tree: `/start`, then non-command text, then callback queries.
pub fn schema() -> UpdateHandler<DbotError> {
    let command_handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(on_command);

    let text_handler = Update::filter_message()
        .filter(|msg: Message| msg.text().is_some_and(|t| !is_command(t)))
        .endpoint(on_text);

    let callback_handler = Update::filter_callback_query().endpoint(on_callback);

    dptree::entry()
        .branch(command_handler)
        .branch(text_handler)
        .branch(callback_handler)
}

async fn on_command(
    bot: Bot,
    update: Update,
    msg: Message,
    cmd: Command,
) -> std::result::Result<(), DbotError> {
    let bot = TelegramBotAdapter::new(bot);
    let core_update = message_update(&update, &msg);
    let Some(core_msg) = core_update.effective_message() else {
        return Ok(());
    };
    info!(
        update_id = core_update.id,
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        command = ?cmd,
        "Received command"
    );

    let result = match cmd {
        Command::Start => handlers::start(&bot, core_msg).await,
    };
    if let Err(e) = result {
        handle_error(&bot, Some(&core_update), &e).await;
    }
    Ok(())
}

async fn on_text(bot: Bot, update: Update, msg: Message) -> std::result::Result<(), DbotError> {
    let bot = TelegramBotAdapter::new(bot);
    let core_update = message_update(&update, &msg);
    let Some(core_msg) = core_update.effective_message() else {
        return Ok(());
    };
    info!(
        update_id = core_update.id,
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_content = %core_msg.content,
        "Received message"
    );

    if let Err(e) = handlers::handle_text_message(&bot, core_msg).await {
        handle_error(&bot, Some(&core_update), &e).await;
    }
    Ok(())
}

async fn on_callback(
    bot: Bot,
    update: Update,
    query: CallbackQuery,
) -> std::result::Result<(), DbotError> {
    let bot = TelegramBotAdapter::new(bot);
    let core_update = callback_update(&update, &query);
    let dbot_core::UpdateKind::CallbackQuery(core_query) = &core_update.kind else {
        return Ok(());
    };
    info!(
        update_id = core_update.id,
        user_id = core_query.user.id,
        data = ?core_query.data,
        "Received callback query"
    );

    if let Err(e) = handlers::handle_button(&bot, core_query).await {
        handle_error(&bot, Some(&core_update), &e).await;
    }
    Ok(())
}

/// Builds the bot from `config`, registers the handlers and polls until Ctrl-C.
#[instrument(skip(config), fields(drop_pending_updates = config.drop_pending_updates))]
pub async fn run(config: &TelegramConfig) -> Result<()> {
    config.validate()?;
    let bot = config.build_bot()?;
    let error_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));

    let mut listener = Polling::builder(bot.clone());
    if config.drop_pending_updates {
        listener = listener.drop_pending_updates();
    }
    let listener = listener.build();

    info!("Starting bot...");

    Dispatcher::builder(bot, schema())
        .default_handler(|update| async move {
            debug!(update_id = update.id.0, "Unhandled update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(listener, PollingErrorHandler::new(error_bot))
        .await;

    info!("Bot stopped");
    Ok(())
}
