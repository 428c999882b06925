// SPDX-License-Identifier: MIT OR Apache-2.0

//! A minimal INI configuration parser with typed accessors.
//!
//! The format is deliberately small: bracketed `[section]` headers, `key = value`
//! entries, and `#` or `;` end-of-line comments. Entries that appear before the first
//! header belong to an implicit default section. There are no nested sections,
//! multi-line values, lists, or interpolation.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Text utilities, the line parser, the [`Ini`](domain::Ini) store
//!   and typed conversions
//! - **Ports**: Trait definitions that define interfaces (`ConfigParser`)
//! - **Adapters**: Implementations that load text from somewhere (INI files)
//!
//! # Feature Flags
//!
//! - `file`: Enable the INI file adapter and OS config-directory lookup (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use inicfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let ini = Ini::parse(
//!     "log_level = info\n\
//!      [server]\n\
//!      host = 0.0.0.0   # listen everywhere\n\
//!      port = 8080\n",
//! )?;
//!
//! assert_eq!(ini.get("server", "host")?, "0.0.0.0");
//! assert_eq!(ini.get_value("server", "port", 80u16), 8080);
//! assert_eq!(ini.dget_global("log_level", "warn"), "info");
//!
//! // Missing and malformed values both fall back to the default.
//! assert_eq!(ini.get_value("server", "workers", 4usize), 4);
//! assert!(matches!(ini.get("cache", "size"), Err(IniError::UnknownSection { .. })));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{FromIniValue, Ini, IniError, Result, Section};
    pub use crate::ports::ConfigParser;

    // Re-export adapters based on feature flags
    #[cfg(feature = "file")]
    pub use crate::adapters::{IniFileAdapter, IniParser};
}
