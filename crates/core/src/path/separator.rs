use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Directory separator used when rendering expanded paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Backslash,
    Slash,
}

crate::impl_case_insensitive_deserialize!(
    Separator,
    Backslash => "backslash",
    Slash => "slash"
);

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Backslash => '\\',
            Separator::Slash => '/',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Backslash => "\\",
            Separator::Slash => "/",
        }
    }

    /// The separator that must never appear in output rendered with `self`
    pub fn other(self) -> Separator {
        match self {
            Separator::Backslash => Separator::Slash,
            Separator::Slash => Separator::Backslash,
        }
    }

    /// Whether `c` is accepted as a separator on input
    pub fn is_separator(c: char) -> bool {
        c == '/' || c == '\\'
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Backslash => write!(f, "backslash"),
            Separator::Slash => write!(f, "slash"),
        }
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "backslash" | "\\" => Ok(Separator::Backslash),
            "slash" | "/" => Ok(Separator::Slash),
            _ => Err(format!(
                "unknown separator '{s}', expected one of: backslash, slash"
            )),
        }
    }
}
