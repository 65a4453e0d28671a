use std::fmt;

use crate::entry::Entry;
use crate::error::ValidationError;
use crate::util::ensure_canonical;

/// A named group of entries, introduced by a `[name]` header line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    /// Create an empty section that builds to `[name]`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name` is empty, has surrounding whitespace or contains a
    /// line break.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::EmptySectionName);
        }

        ensure_canonical(&name)?;

        Ok(Self::with_name(name))
    }

    fn with_name(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Recognize a normalized line as a `[name]` header.
    ///
    /// The text between the brackets is trimmed. A header without a name (`[]`, `[  ]`) is not
    /// recognized.
    #[must_use]
    pub fn parse_header(line: &str) -> Option<Self> {
        let name = header_name(line)?;

        if name.is_empty() {
            None
        } else {
            Some(Self::with_name(name.to_owned()))
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Value of the first entry named `key`. Later duplicates are ignored.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).next()
    }

    /// Values of every entry named `key`, in order.
    pub fn get_all<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |entry| entry.key() == key)
            .map(Entry::value)
    }

    /// Serialize the header and every entry, each terminated by `\n`.
    #[must_use]
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;

        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }

        Ok(())
    }
}

/// Trimmed text between the brackets of a header-shaped line, which may be empty.
pub(crate) fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?
        .strip_suffix(']')
        .map(str::trim)
}
