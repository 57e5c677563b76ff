//! Pattern matching for token extraction.
//!
//! An ordered list of labeled key patterns is tried first; if none hits,
//! a generic long-alphanumeric-run heuristic takes over. First match wins,
//! no backtracking across rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// Labeled candidate patterns, in priority order.
///
/// Keys are matched case-insensitively; the captured value is a 32–128
/// character alphanumeric run following the key after a colon or
/// whitespace. Labeled values are preferred over the generic heuristic
/// because an unlabeled long run can be any incidental identifier in a
/// log (session id, hash, URL fragment).
static LABELED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // token: <value>
        r"(?i)token[:\s]+([a-zA-Z0-9]{32,128})",
        // security_token / security-token
        r"(?i)security[_-]?token[:\s]+([a-zA-Z0-9]{32,128})",
        // auth_token / auth-token
        r"(?i)auth[_-]?token[:\s]+([a-zA-Z0-9]{32,128})",
        // player_token / player-token
        r"(?i)player[_-]?token[:\s]+([a-zA-Z0-9]{32,128})",
        // "token": "<value>"  (quoted JSON-style field)
        r#"(?i)"token"[:\s]+"([a-zA-Z0-9]{32,128})""#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Generic fallback: any word-boundary-delimited alphanumeric run of
/// 40–128 characters. A heuristic guess with accepted false positives;
/// real-world logs may not tag the value at all.
static GENERIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([a-zA-Z0-9]{40,128})\b").unwrap());

/// Extracts a candidate token from arbitrary log text.
///
/// Tries each labeled pattern in priority order and returns the first
/// captured value. If no labeled pattern matches, returns the first
/// generic long run in document order. Returns `None` when nothing
/// matches — absence is a defined negative result, not an error.
pub fn extract(text: &str) -> Option<&str> {
    for pattern in LABELED_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text)
            && let Some(value) = caps.get(1)
        {
            return Some(value.as_str());
        }
    }

    GENERIC_PATTERN.find(text).map(|m| m.as_str())
}
