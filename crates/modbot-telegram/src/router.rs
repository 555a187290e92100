use std::sync::Arc;

use chrono::{DateTime, Utc};
use teloxide::{
    dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, prelude::*,
    update_listeners::Polling,
};

use modbot_core::{config::Config, messaging::port::MessagingPort, policy::PolicyConfig};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub policy: Arc<PolicyConfig>,
    pub messenger: Arc<dyn MessagingPort>,
    pub started_at: DateTime<Utc>,
}

pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!("modbot started: @{}", me.username()),
        Err(e) => tracing::warn!("get_me failed, continuing: {e}"),
    }
    tracing::info!(
        banned_words = cfg.policy.banned_words().len(),
        allowed_domains = cfg.policy.allowed_domains().len(),
        "moderation policy loaded"
    );

    let state = Arc::new(AppState {
        policy: Arc::new(cfg.policy.clone()),
        messenger: Arc::new(TelegramMessenger::new(bot.clone())),
        started_at: Utc::now(),
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    // Messages that arrived while the bot was down are not moderated.
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("update listener error"),
        )
        .await;

    Ok(())
}
