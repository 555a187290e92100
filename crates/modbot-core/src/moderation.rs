//! Action dispatcher: turns a [`Verdict`] into platform side effects.
//!
//! A violation costs the author their message plus a public notice. Both calls
//! are best-effort: failures are logged and reported back, never retried.

use crate::{
    domain::InboundMessage,
    errors::DispatchError,
    formatting::escape_html,
    messaging::port::MessagingPort,
    policy::Verdict,
};

/// Human-readable notice for a violation, or `None` for clean messages.
///
/// `who` is inserted verbatim; escape it first when sending as HTML.
pub fn notice_text(verdict: &Verdict, who: &str) -> Option<String> {
    match verdict {
        Verdict::Clean => None,
        Verdict::BannedWord(_) => Some(format!(
            "⚠️ {who}, сообщение удалено: запрещенные слова"
        )),
        Verdict::UnsolicitedLink => Some(format!(
            "🔗 {who}, ссылки запрещены без разрешения админов"
        )),
        Verdict::ExcessiveCaps => Some(format!("📢 {who}, не нужно писать капсом")),
    }
}

/// Delete the offending message and warn its author.
///
/// `Clean` is a no-op. For a violation the notice is sent even when the delete
/// failed, so the chat still learns why the message should have gone.
pub async fn dispatch(
    verdict: &Verdict,
    msg: &InboundMessage,
    messenger: &dyn MessagingPort,
) -> Result<(), DispatchError> {
    let who = msg.mention();
    let who = if messenger.capabilities().supports_html {
        escape_html(&who)
    } else {
        who
    };
    let Some(notice) = notice_text(verdict, &who) else {
        return Ok(());
    };

    let target = msg.message_ref();
    let deleted = messenger.delete_message(target).await;
    if let Err(e) = &deleted {
        tracing::warn!(
            chat_id = target.chat_id.0,
            message_id = target.message_id.0,
            "failed to delete message: {e}"
        );
    }

    let notified = messenger.send_html(msg.chat_id, &notice).await;
    if let Err(e) = &notified {
        tracing::warn!(chat_id = msg.chat_id.0, "failed to send moderation notice: {e}");
    }

    match (deleted, notified) {
        (Ok(()), Ok(_)) => {
            tracing::info!(
                chat_id = msg.chat_id.0,
                user_id = msg.user_id.map(|u| u.0),
                "removed message from {}: {verdict}",
                msg.author_label()
            );
            Ok(())
        }
        (Err(source), Ok(_)) => Err(DispatchError::Delete {
            msg: target,
            source,
        }),
        (Ok(()), Err(e)) => Err(DispatchError::Notify(e)),
        (Err(delete), Err(notify)) => Err(DispatchError::DeleteAndNotify {
            msg: target,
            delete,
            notify,
        }),
    }
}
