use std::sync::Arc;

use chrono::Utc;
use teloxide::prelude::*;

use modbot_core::{
    commands::{rules_text, start_text, stats_text, Command},
    domain::ChatId,
};

use crate::router::AppState;

pub async fn handle_command(
    cmd: Command,
    msg: Message,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let body = match cmd {
        Command::Start => start_text().to_string(),
        Command::Rules => rules_text().to_string(),
        Command::Stats => stats_text(state.started_at, Utc::now(), &state.policy),
    };

    let chat_id = ChatId(msg.chat.id.0);
    if let Err(e) = state.messenger.send_html(chat_id, &body).await {
        tracing::warn!(chat_id = chat_id.0, "failed to answer {cmd:?}: {e}");
    }
    Ok(())
}
