// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the INI crate.
//!
//! This module defines the errors that can occur while parsing an INI document or
//! querying the resulting store. All errors use `thiserror` for proper error handling
//! and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for INI operations.
///
/// Parse-time failures (`Syntax`, `Io`) are always fatal to the construction of an
/// [`Ini`](crate::domain::Ini). Query-time failures (`UnknownSection`, `UnknownEntry`)
/// are only surfaced by the `get` family of accessors; the `dget` and typed accessor
/// families substitute the caller's fallback instead.
///
/// # Examples
///
/// ```
/// use inicfg::domain::errors::IniError;
///
/// fn lookup() -> Result<String, IniError> {
///     Err(IniError::UnknownSection {
///         section: "database".to_string(),
///     })
/// }
///
/// assert_eq!(lookup().unwrap_err().to_string(), "Unknown section 'database'.");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IniError {
    /// A line of the document could not be parsed.
    #[error("Syntax error on line {line}: {message}")]
    Syntax {
        /// The 1-based line number of the offending line
        line: usize,
        /// A description of the problem
        message: String,
    },

    /// A query referenced a section that was never declared.
    #[error("Unknown section '{section}'.")]
    UnknownSection {
        /// The section that was not found
        section: String,
    },

    /// A query referenced a key absent from its section.
    #[error("{}", unknown_entry_message(.key, .section.as_deref()))]
    UnknownEntry {
        /// The key that was not found
        key: String,
        /// The section that was searched, or `None` for the default section
        section: Option<String>,
    },

    /// Failed to convert a stored value to the requested type.
    #[error("Failed to convert value for key '{key}' to type {target_type}: {source}")]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred while locating or loading an INI source.
    #[error("INI source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The line source failed to yield a line, or yielded invalid UTF-8.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn unknown_entry_message(key: &str, section: Option<&str>) -> String {
    match section {
        Some(section) => format!("Unknown entry '{}' in section '{}'.", key, section),
        None => format!("Unknown entry '{}'.", key),
    }
}

impl IniError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        IniError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        IniError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        IniError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Returns `true` for the lookup misses that the fallback accessors absorb.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            IniError::UnknownSection { .. } | IniError::UnknownEntry { .. }
        )
    }
}

/// A specialized Result type for INI operations.
pub type Result<T> = std::result::Result<T, IniError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error() {
        let error = IniError::Syntax {
            line: 3,
            message: "The line 'oops' is invalid.".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Syntax error on line 3: The line 'oops' is invalid."
        );
    }

    #[test]
    fn test_unknown_section_error() {
        let error = IniError::UnknownSection {
            section: "server".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown section 'server'.");
        assert!(error.is_lookup_miss());
    }

    #[test]
    fn test_unknown_entry_in_section() {
        let error = IniError::UnknownEntry {
            key: "port".to_string(),
            section: Some("server".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "Unknown entry 'port' in section 'server'."
        );
        assert!(error.is_lookup_miss());
    }

    #[test]
    fn test_unknown_entry_in_default_section() {
        let error = IniError::UnknownEntry {
            key: "port".to_string(),
            section: None,
        };
        assert_eq!(error.to_string(), "Unknown entry 'port'.");
    }

    #[test]
    fn test_type_conversion_error() {
        let source_error = "invalid value".parse::<i32>().unwrap_err();
        let error = IniError::TypeConversionError {
            key: "test.key".to_string(),
            target_type: "i32".to_string(),
            source: Box::new(source_error),
        };
        assert!(error.to_string().contains("test.key"));
        assert!(error.to_string().contains("i32"));
        assert!(!error.is_lookup_miss());
    }

    #[test]
    fn test_source_error() {
        let error = IniError::SourceError {
            source_name: "ini-file".to_string(),
            message: "Failed to read configuration file".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "INI source 'ini-file' error: Failed to read configuration file"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let error = IniError::from(io_error);
        assert!(matches!(error, IniError::Io(_)));
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "not_a_number".parse::<i32>().unwrap_err();
        let error = IniError::from_parse_int_error("n".to_string(), parse_err);
        assert!(matches!(error, IniError::TypeConversionError { .. }));
        assert!(error.to_string().contains("integer"));
    }

    #[test]
    fn test_from_parse_float_error() {
        let parse_err = "not_a_float".parse::<f64>().unwrap_err();
        let error = IniError::from_parse_float_error("x".to_string(), parse_err);
        assert!(error.to_string().contains("float"));
    }

    #[test]
    fn test_from_parse_bool_error() {
        let parse_err = "not_a_bool".parse::<bool>().unwrap_err();
        let error = IniError::from_parse_bool_error("flag".to_string(), parse_err);
        assert!(error.to_string().contains("boolean"));
    }
}
