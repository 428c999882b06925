// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the INI crate.
//!
//! This example demonstrates:
//! - Parsing an INI file handed over by the caller
//! - Strict lookups that report unknown sections and entries
//! - Fallback lookups and typed conversions with defaults
//! - Section handles
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage -- path/to/config.ini
//! ```

use inicfg::prelude::*;

const EMBEDDED: &str = r#"
# Used when no path is given on the command line
app_name = Demo

[server]
host = 0.0.0.0
port = 8080
tls = false

[limits]
max_connections = 256
request_timeout = 2.5
burst = plenty    ; not a number, the default is used instead
"#;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== INI Crate: Basic Usage ===\n");

    let ini = match std::env::args().nth(1) {
        Some(path) => IniFileAdapter::from_file(path)?.into_ini(),
        None => Ini::parse(EMBEDDED)?,
    };

    // Example 1: Strict lookups
    println!("--- Example 1: Strict Lookups ---");
    match ini.get_global("app_name") {
        Ok(name) => println!("✓ app_name: {}", name),
        Err(e) => println!("✗ {}", e),
    }
    match ini.get("cache", "size") {
        Ok(size) => println!("✓ cache.size: {}", size),
        Err(e) => println!("✗ {}", e),
    }

    // Example 2: Fallback lookups
    println!("\n--- Example 2: Fallback Lookups ---");
    println!("server.host: {}", ini.dget("server", "host", "127.0.0.1"));
    println!("server.name: {}", ini.dget("server", "name", "unnamed"));

    // Example 3: Typed values
    println!("\n--- Example 3: Typed Values ---");
    let port = ini.get_value("server", "port", 80u16);
    let tls = ini.get_value("server", "tls", true);
    println!("server.port: {} (u16)", port);
    println!("server.tls: {} (bool)", tls);

    // Example 4: Section handles
    println!("\n--- Example 4: Section Handles ---");
    if let Ok(limits) = ini.section("limits") {
        let max_connections = limits.get_value("max_connections", 64u32);
        let timeout = limits.get_value("request_timeout", 30.0f64);
        let burst = limits.get_value("burst", 10u32);
        println!("[{}] has {} entries", limits.name(), limits.len());
        println!("max_connections: {}", max_connections);
        println!("request_timeout: {}s", timeout);
        println!("burst: {} (fell back to default)", burst);
    }

    Ok(())
}
