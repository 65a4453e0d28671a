use std::iter::Enumerate;
use std::str::Split;

use crate::entry::Entry;
use crate::error::ParseError;
use crate::section::{Section, header_name};
use crate::util::normalize_line;

/// What happens to a line that is neither a header nor an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Drop it.
    Lenient,
    /// Drop it, but keep a diagnostic.
    Diagnose,
    /// Keep a diagnostic and stop reading.
    Strict,
}

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub(crate) struct Parser<'a> {
    lines: Enumerate<Split<'a, char>>,
    mode: Mode,
    sections: Vec<Section>,
    diagnostics: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str, mode: Mode) -> Self {
        Self {
            lines: text.split('\n').enumerate(),
            mode,
            sections: Vec::with_capacity(16),
            diagnostics: Vec::new(),
        }
    }
}

impl Parser<'_> {
    /// Consume every line and return the sections read along with any diagnostics.
    ///
    /// In [`Mode::Strict`] the scan ends at the first diagnostic, so at most one is returned.
    pub fn into_parts(mut self) -> (Vec<Section>, Vec<ParseError>) {
        while let Some((index, raw)) = self.lines.next() {
            let Some(text) = normalize_line(raw) else {
                continue;
            };

            let Err(rejected) = self.parse_line(index + 1, text) else {
                continue;
            };

            log::debug!("discarding {rejected}");

            match self.mode {
                Mode::Lenient => {}
                Mode::Diagnose => self.diagnostics.push(rejected),
                Mode::Strict => {
                    self.diagnostics.push(rejected);
                    break;
                }
            }
        }

        (self.sections, self.diagnostics)
    }

    /// Offer a normalized line to the header recognizer, then to the entry recognizer of the
    /// section currently open.
    fn parse_line(&mut self, line: usize, text: &str) -> Result<(), ParseError> {
        if let Some(section) = Section::parse_header(text) {
            log::trace!("line {line}: opening section {:?}", section.name());
            self.sections.push(section);
            return Ok(());
        }

        let entry = Entry::parse(text);

        let Some(section) = self.sections.last_mut() else {
            return Err(match entry {
                Some(_) => ParseError::OrphanEntry { line },
                None => reject(line, text),
            });
        };

        section.push(entry.ok_or_else(|| reject(line, text))?);

        Ok(())
    }
}

/// Explain why a line matched neither recognizer.
fn reject(line: usize, text: &str) -> ParseError {
    if header_name(text).is_some_and(str::is_empty) {
        ParseError::SectionNameEmpty { line }
    } else if text.starts_with(crate::entry::SEPARATOR) {
        ParseError::EmptyKey { line }
    } else {
        ParseError::UnrecognizedLine {
            line,
            text: text.to_owned(),
        }
    }
}
