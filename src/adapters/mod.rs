// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! Each adapter acquires configuration text from a specific place and hands it to
//! the domain parser.

#[cfg(feature = "file")]
pub mod ini_file;

// Re-export adapters based on feature flags
#[cfg(feature = "file")]
pub use ini_file::{IniFileAdapter, IniParser};
