//! Content policy: the message classifier.
//!
//! Classification is a pure function of the message text and a [`PolicyConfig`].
//! Nothing is remembered between messages.

use std::{fmt, sync::OnceLock};

use regex::Regex;

use crate::domain::InboundMessage;

/// Messages longer than this (in characters) are checked for all-caps.
pub const CAPS_MIN_LEN: usize = 10;

pub const DEFAULT_BANNED_WORDS: &[&str] = &[
    "спам",
    "реклама",
    "продам",
    "куплю",
    "заработок",
    "млм",
    "пирамида",
    "инвестиции",
    "криптовалюта",
];

pub const DEFAULT_ALLOWED_DOMAINS: &[&str] = &["youtube.com", "youtu.be"];

/// Immutable moderation lists, built once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyConfig {
    banned_words: Vec<String>,
    allowed_domains: Vec<String>,
}

impl PolicyConfig {
    /// Entries are trimmed and lowercased; empty entries and duplicates are
    /// dropped. Order is kept: it decides which banned word is reported.
    pub fn new<W, D>(banned_words: W, allowed_domains: D) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        Self {
            banned_words: normalize_list(banned_words),
            allowed_domains: normalize_list(allowed_domains),
        }
    }

    pub fn banned_words(&self) -> &[String] {
        &self.banned_words
    }

    pub fn allowed_domains(&self) -> &[String] {
        &self.allowed_domains
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BANNED_WORDS, DEFAULT_ALLOWED_DOMAINS)
    }
}

fn normalize_list<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let v = item.as_ref().trim().to_lowercase();
        if !v.is_empty() && !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// Outcome of classifying one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    /// Carries the configured word that matched.
    BannedWord(String),
    UnsolicitedLink,
    ExcessiveCaps,
}

impl Verdict {
    pub fn is_violation(&self) -> bool {
        !matches!(self, Verdict::Clean)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Clean => f.write_str("clean"),
            Verdict::BannedWord(w) => write!(f, "banned word '{w}'"),
            Verdict::UnsolicitedLink => f.write_str("unsolicited link"),
            Verdict::ExcessiveCaps => f.write_str("excessive caps"),
        }
    }
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)https?://|www\.").expect("valid link regex"))
}

/// Classify a message body. First matching rule wins:
/// banned word, then unsolicited link, then excessive caps.
pub fn classify(text: &str, config: &PolicyConfig) -> Verdict {
    if text.is_empty() {
        return Verdict::Clean;
    }

    let lower = text.to_lowercase();

    if let Some(word) = config
        .banned_words
        .iter()
        .find(|w| lower.contains(w.as_str()))
    {
        return Verdict::BannedWord(word.clone());
    }

    if link_re().is_match(text)
        && !config
            .allowed_domains
            .iter()
            .any(|d| lower.contains(d.as_str()))
    {
        return Verdict::UnsolicitedLink;
    }

    if text.chars().count() > CAPS_MIN_LEN && is_all_caps(text) {
        return Verdict::ExcessiveCaps;
    }

    Verdict::Clean
}

/// Absent text (stickers, media without caption) is always clean.
pub fn classify_message(msg: &InboundMessage, config: &PolicyConfig) -> Verdict {
    match msg.text.as_deref() {
        Some(text) => classify(text, config),
        None => Verdict::Clean,
    }
}

/// True when the text has at least one uppercase letter and every other cased
/// letter is uppercase too. Uncased characters (digits, punctuation, CJK) are
/// ignored; titlecase letters such as `ǅ` count as not uppercase.
fn is_all_caps(text: &str) -> bool {
    let mut saw_upper = false;
    for c in text.chars() {
        if c.is_uppercase() {
            saw_upper = true;
        } else if is_cased(c) {
            return false;
        }
    }
    saw_upper
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.to_uppercase().ne(c.to_lowercase())
}
