// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns raw configuration text
//! into an [`Ini`] store. Adapters that load configuration from somewhere (a file,
//! an embedded resource) depend on this trait rather than on a concrete parser.

use crate::domain::{Ini, Result};
use std::io::{BufRead, Read};

/// A trait for parsing configuration text into an [`Ini`] store.
///
/// # Examples
///
/// ```rust
/// use inicfg::domain::{Ini, Result};
/// use inicfg::ports::ConfigParser;
///
/// // Accepts `key: value` lines by rewriting them to `key = value`.
/// struct ColonParser;
///
/// impl ConfigParser for ColonParser {
///     fn parse(&self, content: &str) -> Result<Ini> {
///         Ini::parse(&content.replace(':', "="))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["colon"]
///     }
/// }
///
/// let ini = ColonParser.parse("[a]\nk: v").unwrap();
/// assert_eq!(ini.get("a", "k").unwrap(), "v");
/// ```
pub trait ConfigParser {
    /// Parses configuration content into an [`Ini`] store.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(Ini)` - The parsed configuration
    /// * `Err(IniError)` - The content was malformed
    fn parse(&self, content: &str) -> Result<Ini>;

    /// Parses configuration read from an open line source.
    ///
    /// The default implementation reads the whole source into memory and calls
    /// [`parse`](Self::parse). Read failures, including invalid UTF-8, are reported
    /// as [`IniError::Io`](crate::domain::IniError::Io).
    fn parse_reader(&self, reader: &mut dyn BufRead) -> Result<Ini> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse(&content)
    }

    /// Returns the file extensions supported by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if `extension` is one of [`supported_extensions`](Self::supported_extensions),
    /// compared ASCII case-insensitively.
    fn supports_extension(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::IniError;
    use std::io::Cursor;

    // Test implementation of ConfigParser that ignores its input
    struct FixedParser;

    impl ConfigParser for FixedParser {
        fn parse(&self, _content: &str) -> Result<Ini> {
            Ini::parse("[test]\nkey = value")
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let ini = FixedParser.parse("dummy content").unwrap();
        assert_eq!(ini.get("test", "key").unwrap(), "value");
    }

    #[test]
    fn test_parser_supported_extensions() {
        let extensions = FixedParser.supported_extensions();
        assert_eq!(extensions, &["test", "tst"]);
    }

    #[test]
    fn test_parser_parse_reader_default() {
        let mut reader = Cursor::new("ignored");
        let ini = FixedParser.parse_reader(&mut reader).unwrap();
        assert_eq!(ini.get("test", "key").unwrap(), "value");
    }

    #[test]
    fn test_parser_parse_reader_invalid_utf8() {
        let mut reader: &[u8] = b"\xFF\xFE";
        assert!(matches!(
            FixedParser.parse_reader(&mut reader),
            Err(IniError::Io(_))
        ));
    }

    #[test]
    fn test_supports_extension_case_insensitive() {
        assert!(FixedParser.supports_extension("TST"));
        assert!(!FixedParser.supports_extension("yaml"));
    }
}
