/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a Telegram message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// An incoming chat message as seen by the moderation core.
///
/// Built by the messenger adapter from its own update type; the core only reads it.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub user_id: Option<UserId>,
    pub text: Option<String>,
    /// `@username` without the `@`, when the author has one.
    pub author_handle: Option<String>,
    /// Fallback display name (first name on Telegram).
    pub author_name: String,
}

impl InboundMessage {
    pub fn message_ref(&self) -> MessageRef {
        MessageRef {
            chat_id: self.chat_id,
            message_id: self.message_id,
        }
    }

    /// How the author is addressed in a notice: `@handle`, else `@` + display name.
    pub fn mention(&self) -> String {
        format!("@{}", self.author_label())
    }

    /// Handle when present, else the display name.
    pub fn author_label(&self) -> &str {
        self.author_handle
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(&self.author_name)
    }
}
