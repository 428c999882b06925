// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The traits here define the seams between the domain and the adapters that feed
//! it text.

pub mod parser;

// Re-export commonly used types
pub use parser::ConfigParser;
