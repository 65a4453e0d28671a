use std::fmt;

use crate::error::ValidationError;
use crate::util::ensure_canonical;

/// Divides an entry line into its key and value.
pub const SEPARATOR: char = '=';

/// A single `key=value` pair belonging to a [`Section`](crate::Section).
///
/// Keys are never empty; values may be. Both are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    /// Create an entry that builds to `key=value`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the pair would not be read back unchanged by
    /// [`Entry::parse`]: an empty key, surrounding whitespace or line breaks in either part, a
    /// key containing `=`, or a pair that would form a `[section]` header line.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let value = value.into();

        if key.is_empty() {
            return Err(ValidationError::EmptyKey);
        }

        ensure_canonical(&key)?;
        ensure_canonical(&value)?;

        if key.contains(SEPARATOR) {
            return Err(ValidationError::SeparatorInKey { key });
        }

        if key.starts_with('[') && value.ends_with(']') {
            return Err(ValidationError::HeaderShaped { key, value });
        }

        Ok(Self { key, value })
    }

    /// Recognize a normalized line as `key = value`.
    ///
    /// The first `=` splits the line; both sides are trimmed. Returns `None` when the line has no
    /// separator or nothing before it.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (key, value) = line.split_once(SEPARATOR)?;
        let key = key.trim();

        if key.is_empty() {
            return None;
        }

        Some(Self {
            key: key.to_owned(),
            value: value.trim().to_owned(),
        })
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Serialize to a single line without a terminator. No whitespace surrounds the separator.
    #[must_use]
    pub fn build(&self) -> String {
        format!("{}{SEPARATOR}{}", self.key, self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.key, self.value)
    }
}
