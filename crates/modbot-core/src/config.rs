use std::{env, fs, path::Path};

use crate::{
    errors::Error,
    policy::{PolicyConfig, DEFAULT_ALLOWED_DOMAINS, DEFAULT_BANNED_WORDS},
    Result,
};

/// Typed process configuration, loaded once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub policy: PolicyConfig,
}

impl Config {
    /// Load from the process environment (after applying `.env`, if present).
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN")
            .and_then(non_empty)
            .or_else(|| lookup("TELEGRAM_BOT_TOKEN").and_then(non_empty))
            .ok_or_else(|| {
                Error::Config("BOT_TOKEN environment variable is required".to_string())
            })?;

        let banned_words =
            parse_csv(lookup("BANNED_WORDS")).unwrap_or_else(|| to_owned(DEFAULT_BANNED_WORDS));
        let allowed_domains = parse_csv(lookup("ALLOWED_DOMAINS"))
            .unwrap_or_else(|| to_owned(DEFAULT_ALLOWED_DOMAINS));

        Ok(Self {
            bot_token: bot_token.trim().to_string(),
            policy: PolicyConfig::new(banned_words, allowed_domains),
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let Some((key, val)) = parse_dotenv_line(raw) else {
            continue;
        };
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv_line(raw: &str) -> Option<(String, String)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (k, v) = line.split_once('=')?;
    let key = k.trim();
    if key.is_empty() {
        return None;
    }

    let mut val = v.trim();
    // Strip optional surrounding quotes.
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        val = &val[1..val.len() - 1];
    }

    Some((key.to_string(), val.to_string()))
}

/// `None` when unset or when the list has no non-empty entries.
fn parse_csv(v: Option<String>) -> Option<Vec<String>> {
    let out = v?
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
