// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the parser, the store and typed conversions.
//!
//! This module is independent of any external concerns: it turns already-acquired
//! text into an [`Ini`] and answers queries against it.

pub mod errors;
pub mod parser;
pub mod store;
pub mod text;
pub mod value;

// Re-export commonly used types
pub use errors::{IniError, Result};
pub use store::{Ini, Section};
pub use value::FromIniValue;
