// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented INI parser.
//!
//! The parser consumes a document one physical line at a time. Each non-empty line
//! is either a section header (`[name]`) or an entry (`key = value`); anything else
//! aborts the parse with [`IniError::Syntax`]. Entries that appear before the first
//! header go into the default section.

use crate::domain::errors::{IniError, Result};
use crate::domain::store::Ini;
use crate::domain::text::{strip_comments, trim, WHITESPACE};
use std::io::BufRead;

/// Parses an in-memory document.
///
/// # Examples
///
/// ```
/// use inicfg::domain::parser::parse_str;
///
/// let ini = parse_str("name = demo\n[server]\nport = 80").unwrap();
/// assert_eq!(ini.get_global("name").unwrap(), "demo");
/// assert_eq!(ini.get("server", "port").unwrap(), "80");
/// ```
pub fn parse_str(text: &str) -> Result<Ini> {
    let mut parser = LineParser::new();
    for line in text.lines() {
        parser.feed(line)?;
    }
    Ok(parser.finish())
}

/// Parses a document from an already-open line source.
///
/// The reader is consumed to the end or until the first error. Read failures are
/// reported as [`IniError::Io`]. Every line must be valid UTF-8; a line that is not
/// is rejected with an [`IniError::Io`] of kind `InvalidData`.
///
/// # Examples
///
/// ```
/// use inicfg::domain::parser::parse_reader;
/// use std::io::Cursor;
///
/// let ini = parse_reader(Cursor::new("[a]\nk = 1\nk = 2\n")).unwrap();
/// assert_eq!(ini.get("a", "k").unwrap(), "2");
/// ```
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Ini> {
    let mut parser = LineParser::new();
    for line in reader.lines() {
        parser.feed(&line?)?;
    }
    Ok(parser.finish())
}

/// The section that entries are currently written to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Default,
    Named(String),
}

/// Single-pass parser state.
///
/// Once `feed` has returned an error the parser must be discarded; the partially
/// built store is never handed out.
#[derive(Debug)]
pub(crate) struct LineParser {
    ini: Ini,
    target: Target,
    line: usize,
}

impl LineParser {
    pub(crate) fn new() -> Self {
        Self {
            ini: Ini::default(),
            target: Target::Default,
            line: 0,
        }
    }

    /// Processes one physical line.
    pub(crate) fn feed(&mut self, raw: &str) -> Result<()> {
        self.line += 1;

        let line = strip_comments(trim(raw, WHITESPACE));

        if line.is_empty() {
            return Ok(());
        }

        if line.starts_with('[') {
            return self.section_header(line);
        }

        match line.split_once('=') {
            Some((key, value)) => {
                let key = trim(key, WHITESPACE).to_string();
                let value = trim(value, WHITESPACE).to_string();
                let target = match &self.target {
                    Target::Default => None,
                    Target::Named(name) => Some(name.as_str()),
                };
                self.ini.entries_mut(target).insert(key, value);
                Ok(())
            }
            None => Err(self.syntax_error(format!("The line '{}' is invalid.", line))),
        }
    }

    fn section_header(&mut self, line: &str) -> Result<()> {
        if !line.ends_with(']') {
            return Err(self.syntax_error(format!(
                "The section '{}' is missing a closing bracket.",
                line
            )));
        }

        let name = trim(&line[1..line.len() - 1], WHITESPACE).to_string();
        if !self.ini.has_section(&name) {
            tracing::trace!("Creating section '{}' at line {}", name, self.line);
        }
        self.ini.entries_mut(Some(&name));
        self.target = Target::Named(name);
        Ok(())
    }

    fn syntax_error(&self, message: String) -> IniError {
        tracing::debug!("INI syntax error on line {}: {}", self.line, message);
        IniError::Syntax {
            line: self.line,
            message,
        }
    }

    pub(crate) fn finish(self) -> Ini {
        tracing::debug!(
            "Parsed INI document: {} lines, {} sections",
            self.line,
            self.ini.section_names().count()
        );
        self.ini
    }
}
