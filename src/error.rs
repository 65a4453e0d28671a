/// A line that the parser could not turn into a section or an entry.
///
/// In the default (lenient) mode these are only reported as diagnostics and the line is dropped.
/// Strict parsing fails on the first one. Line numbers are 1-based physical lines.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: section name cannot be empty")]
    SectionNameEmpty { line: usize },
    #[error("line {line}: entry appears before any section header")]
    OrphanEntry { line: usize },
    #[error("line {line}: entry key cannot be empty")]
    EmptyKey { line: usize },
    #[error("line {line}: expected `[section]` or `key = value`, found {text:?}")]
    UnrecognizedLine { line: usize, text: String },
}

impl ParseError {
    #[must_use]
    pub fn line(&self) -> usize {
        match *self {
            Self::SectionNameEmpty { line }
            | Self::OrphanEntry { line }
            | Self::EmptyKey { line }
            | Self::UnrecognizedLine { line, .. } => line,
        }
    }
}

/// Rejected input to [`Section::new`](crate::Section::new) or [`Entry::new`](crate::Entry::new).
///
/// Every variant describes text that would not survive being built and parsed again.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("section name cannot be empty")]
    EmptySectionName,
    #[error("entry key cannot be empty")]
    EmptyKey,
    #[error("{text:?} has leading or trailing whitespace")]
    Untrimmed { text: String },
    #[error("{text:?} contains a line break")]
    LineBreak { text: String },
    #[error("key {key:?} contains the `=` separator")]
    SeparatorInKey { key: String },
    #[error("entry `{key}={value}` would be read back as a section header")]
    HeaderShaped { key: String, value: String },
}
