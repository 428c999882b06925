// SPDX-License-Identifier: MIT OR Apache-2.0

//! The parsed INI store and its read-only query API.
//!
//! An [`Ini`] is built once by the parser and never mutated afterwards. Queries come
//! in two families:
//!
//! - `get`/`get_global`/`section` return a [`Result`] and report
//!   [`IniError::UnknownSection`] or [`IniError::UnknownEntry`] on a miss.
//! - `dget`, `get_value` and `get_string` never fail; any miss (or, for the typed
//!   accessors, any conversion failure) yields the caller's fallback.

use crate::domain::errors::{IniError, Result};
use crate::domain::parser;
use crate::domain::value::FromIniValue;
use std::collections::HashMap;
use std::io::BufRead;
use std::str::FromStr;

type Entries = HashMap<String, String>;

/// A parsed INI document.
///
/// # Examples
///
/// ```
/// use inicfg::domain::Ini;
///
/// let ini = Ini::parse("verbose = true\n[server]\nport = 8080\n").unwrap();
///
/// assert_eq!(ini.get("server", "port").unwrap(), "8080");
/// assert_eq!(ini.get_value("server", "port", 0u16), 8080);
/// assert_eq!(ini.get_global_value("verbose", false), true);
/// assert_eq!(ini.dget("server", "host", "localhost"), "localhost");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ini {
    sections: HashMap<String, Entries>,
    global: Entries,
}

impl Ini {
    /// Parses an in-memory document.
    ///
    /// Fails with [`IniError::Syntax`] on the first malformed line.
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse_str(text)
    }

    /// Parses a document from an already-open line source.
    ///
    /// The caller keeps ownership of whatever the reader wraps (a file handle, a
    /// socket, a buffer); it is only read, never opened or closed here.
    ///
    /// # Errors
    ///
    /// * [`IniError::Syntax`] on the first malformed line
    /// * [`IniError::Io`] if the reader fails, or with kind `InvalidData` if a line
    ///   is not valid UTF-8; values are stored as `String`, so raw bytes are rejected
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::Ini;
    /// use std::io::Cursor;
    ///
    /// let ini = Ini::from_reader(Cursor::new("[a]\nk = v\n")).unwrap();
    /// assert_eq!(ini.get("a", "k").unwrap(), "v");
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        parser::parse_reader(reader)
    }

    /// Returns the value of `key` in `section`.
    ///
    /// # Errors
    ///
    /// * [`IniError::UnknownSection`] if `section` was never declared
    /// * [`IniError::UnknownEntry`] if the section exists but has no `key`
    pub fn get(&self, section: &str, key: &str) -> Result<&str> {
        let entries = self
            .sections
            .get(section)
            .ok_or_else(|| IniError::UnknownSection {
                section: section.to_string(),
            })?;

        entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| IniError::UnknownEntry {
                key: key.to_string(),
                section: Some(section.to_string()),
            })
    }

    /// Returns the value of `key` in the default section.
    ///
    /// # Errors
    ///
    /// * [`IniError::UnknownEntry`] if the default section has no `key`
    pub fn get_global(&self, key: &str) -> Result<&str> {
        self.global
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| IniError::UnknownEntry {
                key: key.to_string(),
                section: None,
            })
    }

    /// Returns the value of `key` in `section`, or `fallback` if either is missing.
    pub fn dget<'a>(&'a self, section: &str, key: &str, fallback: &'a str) -> &'a str {
        or_fallback(self.get(section, key), fallback, Some(section), key)
    }

    /// Returns the value of `key` in the default section, or `fallback`.
    pub fn dget_global<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        or_fallback(self.get_global(key), fallback, None, key)
    }

    /// Returns a read-only handle bound to `name`.
    ///
    /// # Errors
    ///
    /// * [`IniError::UnknownSection`] if `name` was never declared
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::Ini;
    ///
    /// let ini = Ini::parse("[db]\nhost = example.org").unwrap();
    /// let db = ini.section("db").unwrap();
    /// assert_eq!(db.name(), "db");
    /// assert_eq!(db.get("host").unwrap(), "example.org");
    /// assert!(ini.section("cache").is_err());
    /// ```
    pub fn section(&self, name: &str) -> Result<Section<'_>> {
        let (name, _) = self
            .sections
            .get_key_value(name)
            .ok_or_else(|| IniError::UnknownSection {
                section: name.to_string(),
            })?;

        Ok(Section { ini: self, name })
    }

    /// Looks up `key` in `section` and converts it to `T`.
    ///
    /// Returns `default` if the lookup fails or the stored text is not a complete,
    /// valid `T`. The two cases cannot be told apart; use [`Ini::get`] and convert
    /// by hand when the difference matters.
    pub fn get_value<T: FromIniValue>(&self, section: &str, key: &str, default: T) -> T {
        let converted = self
            .get(section, key)
            .and_then(|raw| T::from_ini_value(key, raw));
        or_fallback(converted, default, Some(section), key)
    }

    /// Looks up `key` in the default section and converts it to `T`.
    pub fn get_global_value<T: FromIniValue>(&self, key: &str, default: T) -> T {
        let converted = self
            .get_global(key)
            .and_then(|raw| T::from_ini_value(key, raw));
        or_fallback(converted, default, None, key)
    }

    /// Owned-string variant of [`Ini::dget`].
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.dget(section, key, default).to_string()
    }

    /// Owned-string variant of [`Ini::dget_global`].
    pub fn get_global_string(&self, key: &str, default: &str) -> String {
        self.dget_global(key, default).to_string()
    }

    /// Returns `true` if a header for `name` appeared in the document.
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterates over the declared section names, in no particular order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterates over the keys of the default section, in no particular order.
    pub fn global_keys(&self) -> impl Iterator<Item = &str> {
        self.global.keys().map(String::as_str)
    }

    /// Returns `true` if the document declared no sections and no default entries.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.global.is_empty()
    }

    /// Returns the entry map the parser writes to, creating a named section on demand.
    pub(crate) fn entries_mut(&mut self, section: Option<&str>) -> &mut Entries {
        match section {
            None => &mut self.global,
            Some(name) => self.sections.entry(name.to_string()).or_default(),
        }
    }
}

impl FromStr for Ini {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Substitutes `fallback` for any failed lookup or conversion.
fn or_fallback<T>(result: Result<T>, fallback: T, section: Option<&str>, key: &str) -> T {
    result.unwrap_or_else(|e| {
        if e.is_lookup_miss() {
            tracing::trace!("Using fallback for missing key '{}' in section {:?}", key, section);
        } else {
            tracing::trace!(
                "Using fallback for malformed key '{}' in section {:?}: {}",
                key,
                section,
                e
            );
        }
        fallback
    })
}

/// A read-only view of one section of an [`Ini`].
///
/// The handle stores the section name and re-resolves it against the store on every
/// query. It borrows the store, so it cannot outlive it.
#[derive(Clone, Copy, Debug)]
pub struct Section<'a> {
    ini: &'a Ini,
    name: &'a str,
}

impl<'a> Section<'a> {
    /// Returns the section name.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the value of `key` in this section.
    ///
    /// # Errors
    ///
    /// * [`IniError::UnknownEntry`] if the section has no `key`
    pub fn get(&self, key: &str) -> Result<&'a str> {
        self.ini.get(self.name, key)
    }

    /// Returns the value of `key`, or `fallback` if it is missing.
    pub fn dget(&self, key: &str, fallback: &'a str) -> &'a str {
        self.ini.dget(self.name, key, fallback)
    }

    /// Looks up `key` and converts it to `T`, returning `default` on any failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::Ini;
    ///
    /// let ini = Ini::parse("[limits]\nmax = 10\nratio = half").unwrap();
    /// let limits = ini.section("limits").unwrap();
    /// assert_eq!(limits.get_value("max", 0u32), 10);
    /// assert_eq!(limits.get_value("ratio", 0.5f64), 0.5);
    /// ```
    pub fn get_value<T: FromIniValue>(&self, key: &str, default: T) -> T {
        self.ini.get_value(self.name, key, default)
    }

    /// Owned-string variant of [`Section::dget`].
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.ini.get_string(self.name, key, default)
    }

    /// Iterates over the keys of this section, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.entries()
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    /// Iterates over the entries of this section, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.entries()
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Returns the number of entries in this section.
    pub fn len(&self) -> usize {
        self.entries().map_or(0, HashMap::len)
    }

    /// Returns `true` if the section holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> Option<&'a Entries> {
        self.ini.sections.get(self.name)
    }
}
