//! Settings infrastructure for sigparse.
//!
//! This module provides support for loading and parsing `sigparse.toml` files
//! that configure how the signature parser treats whitespace and malformed
//! argument tokens.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::SettingsError;

/// File name searched for by [`discover_settings`].
pub const SETTINGS_FILE: &str = "sigparse.toml";

/// Root settings structure loaded from sigparse.toml.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Parser configuration.
    pub parser: Option<ParserSettings>,
}

/// Settings for configuring the `MethodParser`.
#[derive(Debug, Default, Deserialize)]
pub struct ParserSettings {
    /// How runs of spaces between signature tokens are treated (default: literal).
    pub whitespace: Option<WhitespaceMode>,

    /// Reject argument tokens lacking a type or a name (default: false).
    pub strict_arguments: Option<bool>,
}

/// Tokenization mode for the space-separated part of a signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceMode {
    /// Split on every single space. Consecutive spaces yield empty tokens,
    /// which occupy a position of their own.
    #[default]
    Literal,
    /// Trim the input and split on runs of spaces and tabs.
    Collapse,
}

impl Settings {
    /// Parse settings from TOML source.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a settings file.
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn whitespace(&self) -> WhitespaceMode {
        self.parser
            .as_ref()
            .and_then(|p| p.whitespace)
            .unwrap_or_default()
    }

    pub fn strict_arguments(&self) -> bool {
        self.parser
            .as_ref()
            .and_then(|p| p.strict_arguments)
            .unwrap_or(false)
    }
}

/// Load settings from a sigparse.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    match Settings::from_path(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring settings file");
            Settings::default()
        }
    }
}

/// Find the nearest sigparse.toml in `start_dir` or one of its ancestors.
///
/// Returns the path of the file, or `None` when no directory on the way to
/// the filesystem root has one. Load it with [`load_settings`].
pub fn discover_settings(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(SETTINGS_FILE))
        .find(|candidate| candidate.is_file())
}
