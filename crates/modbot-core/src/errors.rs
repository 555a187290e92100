use crate::domain::MessageRef;

/// Core error type for the moderation bot.
///
/// Adapter crates map their transport errors into `External` so the core can
/// log them without knowing which messenger produced them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of the best-effort side effects performed for a violation.
///
/// Never fatal: the message handler logs it and moves on to the next update.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("failed to delete message {msg:?}: {source}")]
    Delete { msg: MessageRef, source: Error },

    #[error("failed to send notice: {0}")]
    Notify(Error),

    #[error("failed to delete message {msg:?} ({delete}) and to send notice ({notify})")]
    DeleteAndNotify {
        msg: MessageRef,
        delete: Error,
        notify: Error,
    },
}
