use std::sync::Arc;

use teloxide::{prelude::*, types::User};

use modbot_core::{
    domain::{ChatId, InboundMessage, MessageId, UserId},
    moderation::dispatch,
    policy::classify_message,
};

use crate::router::AppState;

/// Display name used when a message has no user (anonymous admins, channels).
const ANONYMOUS_AUTHOR: &str = "Аноним";

pub async fn handle_text(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let inbound = inbound_message(&msg);

    let verdict = classify_message(&inbound, &state.policy);
    if !verdict.is_violation() {
        return Ok(());
    }

    // Best-effort: a failed delete/notice is logged and the update still completes.
    if let Err(e) = dispatch(&verdict, &inbound, state.messenger.as_ref()).await {
        tracing::warn!(
            chat_id = inbound.chat_id.0,
            author = inbound.author_label(),
            "moderation action for {verdict} incomplete: {e}"
        );
    }
    Ok(())
}

fn inbound_message(msg: &Message) -> InboundMessage {
    let (user_id, author_handle, author_name) = author_fields(msg.from());
    InboundMessage {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
        user_id,
        text: msg.text().map(str::to_string),
        author_handle,
        author_name,
    }
}

fn author_fields(user: Option<&User>) -> (Option<UserId>, Option<String>, String) {
    let Some(user) = user else {
        return (None, None, ANONYMOUS_AUTHOR.to_string());
    };
    (
        Some(UserId(user.id.0 as i64)),
        user.username.clone(),
        display_name(&user.first_name),
    )
}

fn display_name(first_name: &str) -> String {
    let name = first_name.trim();
    if name.is_empty() {
        ANONYMOUS_AUTHOR.to_string()
    } else {
        name.to_string()
    }
}
