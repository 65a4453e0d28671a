#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Parse, inspect and rebuild sectioned `key=value` configuration text.
//!
//! ```
//! let ini = ini::Ini::parse("[General]\nName = Test\n");
//!
//! assert_eq!(ini.find_section("General").and_then(|s| s.get("Name")), Some("Test"));
//! assert_eq!(ini.build(), "[General]\nName=Test\n\n");
//! ```
//!
//! The crate never touches the file system. It takes a complete text buffer and produces one.

mod entry;
mod error;
mod parser;
mod section;
mod util;

use std::fmt;
use std::str::FromStr;

pub use entry::{Entry, SEPARATOR};
pub use error::{ParseError, ValidationError};
pub use section::Section;

use parser::{Mode, Parser};

/// An ordered collection of sections, kept in the order they first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Ini {
    sections: Vec<Section>,
}

impl Ini {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every section and entry from `text`.
    ///
    /// This never fails: blank lines, lines that are neither `[section]` nor `key = value`, and
    /// entries appearing before the first header are dropped. Use [`Ini::parse_strict`] or
    /// [`Ini::parse_with_diagnostics`] to find out about them.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let (sections, _) = Parser::new(text, Mode::Lenient).into_parts();
        Self { sections }
    }

    /// Like [`Ini::parse`], but fail instead of dropping a line.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] for the first non-blank line that is neither a section header
    /// nor an entry of an open section.
    pub fn parse_strict(text: &str) -> Result<Self, ParseError> {
        let (sections, diagnostics) = Parser::new(text, Mode::Strict).into_parts();

        match diagnostics.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(Self { sections }),
        }
    }

    /// Like [`Ini::parse`], also returning a diagnostic for every line that was dropped.
    #[must_use]
    pub fn parse_with_diagnostics(text: &str) -> (Self, Vec<ParseError>) {
        let (sections, diagnostics) = Parser::new(text, Mode::Diagnose).into_parts();
        (Self { sections }, diagnostics)
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Append a section. An existing section with the same name is left alone.
    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// First section named exactly `name` (case-sensitive).
    #[must_use]
    pub fn find_section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name() == name)
    }

    #[must_use]
    pub fn find_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.name() == name)
    }

    /// Serialize every section in order, each followed by one blank line.
    #[must_use]
    pub fn build(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Ini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{section}")?;
        }

        Ok(())
    }
}

impl FromStr for Ini {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}

impl From<Vec<Section>> for Ini {
    fn from(sections: Vec<Section>) -> Self {
        Self { sections }
    }
}

impl FromIterator<Section> for Ini {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}
