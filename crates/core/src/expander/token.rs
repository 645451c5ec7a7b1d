//! Namespace token detection
//!
//! A reference carries a namespace when it starts with `<name>`, where `name`
//! is made of ASCII alphanumerics and `_ . @ $ ~ + -`.

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<([A-Za-z0-9_.@$~+\-]+)>").expect("valid token regex"));

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.@$~+\-]+$").expect("valid name regex"));

/// A reference split at its namespace token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceToken<'a> {
    /// Namespace name without the angle brackets
    pub name: &'a str,
    /// Everything after the closing `>`
    pub remainder: &'a str,
}

/// Split `reference` into namespace name and remainder, if it has a token
pub fn parse_token(reference: &str) -> Option<NamespaceToken<'_>> {
    let captures = TOKEN_PATTERN.captures(reference)?;
    let whole = captures.get(0)?;
    let name = captures.get(1)?;

    Some(NamespaceToken {
        name: name.as_str(),
        remainder: &reference[whole.end()..],
    })
}

/// Whether `reference` starts with a namespace token
pub fn has_namespace(reference: &str) -> bool {
    TOKEN_PATTERN.is_match(reference)
}

/// Whether `name` is usable as a namespace name
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}
