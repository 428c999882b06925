// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI file adapter.
//!
//! This module opens INI files on behalf of the caller and hands the open handle to
//! a [`ConfigParser`]. The parser itself never touches the filesystem.

use crate::domain::{Ini, IniError, Result};
use crate::ports::ConfigParser;
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Maximum allowed file size for INI configuration files (10MB)
const MAX_INI_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "ini-file";

/// INI parser implementation of [`ConfigParser`].
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::IniParser;
/// use inicfg::ports::ConfigParser;
///
/// let parser = IniParser::new();
/// let ini = parser.parse("[database]\nhost = localhost\nport = 5432").unwrap();
/// assert_eq!(ini.get("database", "host").unwrap(), "localhost");
/// assert!(parser.supports_extension("ini"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<Ini> {
        Ini::parse(content)
    }

    fn parse_reader(&self, reader: &mut dyn BufRead) -> Result<Ini> {
        Ini::from_reader(reader)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini", "cfg", "conf"]
    }
}

/// Loads an [`Ini`] store from a file.
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::adapters::IniFileAdapter;
///
/// // Load from a specific file
/// let adapter = IniFileAdapter::from_file("/etc/myapp/config.ini").unwrap();
/// let port = adapter.ini().get_value("server", "port", 8080u16);
///
/// // Load from default OS location
/// let adapter = IniFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct IniFileAdapter {
    /// Canonical path to the INI file
    file_path: PathBuf,
    /// Parser the file content is handed to
    parser: IniParser,
    /// Parsed store
    ini: Ini,
}

impl IniFileAdapter {
    /// Opens and parses the INI file at `path`.
    ///
    /// # Errors
    ///
    /// * [`IniError::SourceError`] if the path is inaccessible or the file is too large
    /// * [`IniError::Syntax`] or [`IniError::Io`] if the content cannot be parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();

        let canonical_path = file_path.canonicalize().map_err(|e| IniError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Invalid or inaccessible path: {}", display_name(file_path)),
            source: Some(Box::new(e)),
        })?;

        let parser = IniParser::new();
        let extension = canonical_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        if !parser.supports_extension(extension) {
            tracing::debug!(
                "Unrecognized extension '{}' for '{}', parsing as INI",
                extension,
                display_name(&canonical_path)
            );
        }

        let ini = load(&parser, &canonical_path)?;
        tracing::debug!("Loaded INI file '{}'", canonical_path.display());

        Ok(Self {
            file_path: canonical_path,
            parser,
            ini,
        })
    }

    /// Loads `config.ini` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.ini")
    }

    /// Loads `filename` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier
    /// * `filename` - The configuration file name (e.g., "settings.ini")
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| IniError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Re-reads the file.
    ///
    /// If the new content cannot be loaded the previously parsed store is kept and
    /// the error is returned.
    pub fn reload(&mut self) -> Result<()> {
        match load(&self.parser, &self.file_path) {
            Ok(ini) => {
                self.ini = ini;
                tracing::debug!("Reloaded INI file '{}'", self.file_path.display());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to reload INI file '{}': {}",
                    self.file_path.display(),
                    e
                );
                Err(e)
            }
        }
    }

    /// Returns the parsed store.
    pub fn ini(&self) -> &Ini {
        &self.ini
    }

    /// Consumes the adapter and returns the parsed store.
    pub fn into_ini(self) -> Ini {
        self.ini
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn load(parser: &dyn ConfigParser, path: &Path) -> Result<Ini> {
    // Check file size before reading
    let metadata = fs::metadata(path).map_err(|e| IniError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read file metadata: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_INI_FILE_SIZE {
        return Err(IniError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_INI_FILE_SIZE
            ),
            source: None,
        });
    }

    let file = File::open(path).map_err(|e| IniError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to open configuration file: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    parser.parse_reader(&mut BufReader::new(file))
}
