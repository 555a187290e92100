//! Telegram update handlers.
//!
//! `/start`, `/rules` and `/stats` get a static reply and are not moderated.
//! Every other text, including unknown or malformed commands, goes through the
//! moderation core. Non-text messages are ignored.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use modbot_core::commands::Command;

use crate::router::AppState;

mod commands;
mod text;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Some(cmd) = Command::parse(text) {
        return commands::handle_command(cmd, msg, state).await;
    }

    text::handle_text(msg, state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use modbot_core::{
        domain::{ChatId, MessageId, MessageRef},
        messaging::{port::MessagingPort, types::MessagingCapabilities},
        policy::PolicyConfig,
        Result,
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeMessenger {
        sends: Mutex<Vec<String>>,
        deletes: Mutex<Vec<MessageRef>>,
    }

    #[async_trait]
    impl MessagingPort for FakeMessenger {
        fn capabilities(&self) -> MessagingCapabilities {
            MessagingCapabilities {
                supports_html: true,
            }
        }

        async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef> {
            self.sends.lock().unwrap().push(html.to_string());
            Ok(MessageRef {
                chat_id,
                message_id: MessageId(900),
            })
        }

        async fn delete_message(&self, msg: MessageRef) -> Result<()> {
            self.deletes.lock().unwrap().push(msg);
            Ok(())
        }
    }

    fn state(fake: &Arc<FakeMessenger>) -> Arc<AppState> {
        let messenger: Arc<dyn MessagingPort> = fake.clone();
        Arc::new(AppState {
            policy: Arc::new(PolicyConfig::default()),
            messenger,
            started_at: Utc::now(),
        })
    }

    fn group_text(text: &str) -> Message {
        serde_json::from_value(serde_json::json!({
            "message_id": 77,
            "date": 1_700_000_000,
            "chat": { "id": -100_123, "type": "supergroup", "title": "group" },
            "from": {
                "id": 42,
                "is_bot": false,
                "first_name": "Петя",
                "username": "petya"
            },
            "text": text
        }))
        .unwrap()
    }

    async fn route(text: &str) -> Arc<FakeMessenger> {
        let fake = Arc::new(FakeMessenger::default());
        handle_message(group_text(text), state(&fake)).await.unwrap();
        fake
    }

    #[tokio::test]
    async fn known_commands_get_a_reply_and_are_not_moderated() {
        let fake = route("/rules").await;
        assert!(fake.deletes.lock().unwrap().is_empty());
        let sends = fake.sends.lock().unwrap();
        assert_eq!(sends.len(), 1);
        assert!(sends[0].contains("Правила чата"));

        let fake = route("/start@modbot").await;
        assert!(fake.deletes.lock().unwrap().is_empty());
        assert_eq!(fake.sends.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn slash_prefix_does_not_bypass_moderation() {
        let cases = [
            ("/ купите спам", "⚠️ @petya"),
            ("/ https://evil.example.com", "🔗 @petya"),
            ("/ban https://evil.example.com", "🔗 @petya"),
        ];
        for (text, notice) in cases {
            let fake = route(text).await;
            assert_eq!(
                *fake.deletes.lock().unwrap(),
                vec![MessageRef {
                    chat_id: ChatId(-100_123),
                    message_id: MessageId(77),
                }],
                "{text}"
            );
            assert!(fake.sends.lock().unwrap()[0].starts_with(notice), "{text}");
        }
    }

    #[tokio::test]
    async fn plain_violation_is_moderated() {
        let fake = route("Купите спам").await;
        assert_eq!(fake.deletes.lock().unwrap().len(), 1);
        assert_eq!(
            fake.sends.lock().unwrap()[0],
            "⚠️ @petya, сообщение удалено: запрещенные слова"
        );
    }

    #[tokio::test]
    async fn clean_text_and_unknown_clean_command_are_left_alone() {
        for text in ["привет всем", "/ban"] {
            let fake = route(text).await;
            assert!(fake.deletes.lock().unwrap().is_empty(), "{text}");
            assert!(fake.sends.lock().unwrap().is_empty(), "{text}");
        }
    }
}
