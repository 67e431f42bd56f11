use once_cell::sync::Lazy;
use regex::Regex;

use crate::common::Record;

// ASCII punctuation only: !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[[:punct:]]").expect("invalid regex"));

/// Drops ASCII punctuation, lowercases, then trims surrounding whitespace.
pub fn normalize_text(text: &str) -> String {
    PUNCTUATION
        .replace_all(text, "")
        .to_lowercase()
        .trim()
        .to_string()
}

pub fn normalize_record(record: Record) -> Record {
    Record {
        text: normalize_text(&record.text),
        source: record.source,
    }
}
