//! Informational commands: `/start`, `/rules`, `/stats`.
//!
//! Replies are Telegram HTML. None of them touches moderation state.

use chrono::{DateTime, Utc};

use crate::policy::PolicyConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Rules,
    Stats,
}

impl Command {
    /// Parse `/cmd`, `/cmd@botname` or `/cmd args`. Unknown commands yield `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let (cmd, _args) = parse_command(text)?;
        match cmd.as_str() {
            "start" | "help" => Some(Command::Start),
            "rules" => Some(Command::Rules),
            "stats" => Some(Command::Stats),
            _ => None,
        }
    }
}

/// Split `/cmd@botname arg1 ...` into the lowercased command name and the rest.
pub fn parse_command(text: &str) -> Option<(String, String)> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let mut parts = text.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("").trim();
    let rest = parts.next().unwrap_or("").trim().to_string();

    let cmd = first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase();

    Some((cmd, rest))
}

pub fn start_text() -> &'static str {
    "🤖 <b>Бот-модератор активирован!</b>\n\n\
Доступные команды:\n\
/start - запуск бота\n\
/rules - правила чата\n\
/stats - статистика модерации"
}

pub fn rules_text() -> &'static str {
    "📋 <b>Правила чата:</b>\n\n\
1️⃣ Запрещен спам и реклама\n\
2️⃣ Запрещены оскорбления\n\
3️⃣ Ссылки только с разрешения админов\n\
4️⃣ Будьте вежливы и уважительны\n\n\
За нарушения - предупреждение или бан ⛔"
}

/// Status block with uptime and the size of the active policy lists.
pub fn stats_text(started_at: DateTime<Utc>, now: DateTime<Utc>, policy: &PolicyConfig) -> String {
    let uptime = format_duration(now.signed_duration_since(started_at).num_seconds());
    format!(
        "📊 <b>Статистика модерации:</b>\n\n\
🤖 Бот работает исправно\n\
⚡ Проверяю все сообщения\n\
🛡️ Защищаю чат от спама\n\n\
⏱ Аптайм: {uptime}\n\
🚫 Запрещенных слов: {}\n\
✅ Разрешенных доменов: {}\n\n\
Версия: {}",
        policy.banned_words().len(),
        policy.allowed_domains().len(),
        env!("CARGO_PKG_VERSION"),
    )
}

pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if days > 0 {
        return format!("{days}d {hours}h {mins}m");
    }
    if hours > 0 {
        return format!("{hours}h {mins}m {secs}s");
    }
    if mins > 0 {
        return format!("{mins}m {secs}s");
    }
    format!("{secs}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn parses_commands_with_bot_suffix_and_args() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/rules@ModBot"), Some(Command::Rules));
        assert_eq!(Command::parse("  /STATS now please"), Some(Command::Stats));
        assert_eq!(Command::parse("/help"), Some(Command::Start));
    }

    #[test]
    fn unknown_and_non_commands() {
        assert_eq!(Command::parse("/ban @someone"), None);
        assert_eq!(Command::parse("start"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(
            parse_command("/ban@bot  @someone  "),
            Some(("ban".to_string(), "@someone".to_string()))
        );
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(-5), "0s");
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(125), "2m 5s");
        assert_eq!(format_duration(3 * 3600 + 61), "3h 1m 1s");
        assert_eq!(format_duration(2 * 86400 + 3600), "2d 1h 0m");
    }

    #[test]
    fn stats_reports_uptime_and_list_sizes() {
        let start = Utc::now();
        let now = start + Duration::seconds(3725);
        let body = stats_text(start, now, &PolicyConfig::default());
        assert!(body.contains("Аптайм: 1h 2m 5s"));
        assert!(body.contains("Запрещенных слов: 9"));
        assert!(body.contains("Разрешенных доменов: 2"));
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn static_bodies_list_commands_and_rules() {
        for cmd in ["/start", "/rules", "/stats"] {
            assert!(start_text().contains(cmd));
        }
        assert!(rules_text().contains("Ссылки только с разрешения админов"));
    }
}
