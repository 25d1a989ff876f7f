//! Startup configuration: the button set, quick-fill texts and select hook.
//!
//! Loaded from TOML. Every section is optional; missing sections fall back
//! to the built-in defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ButtonDescriptor;

/// One quick-fill shortcut for the text input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickFill {
    pub label: String,
    pub text: String,
}

impl QuickFill {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// External command fired after a button selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_buttons")]
    pub buttons: Vec<ButtonDescriptor>,
    #[serde(default = "default_quick_fills")]
    pub quick_fills: Vec<QuickFill>,
    #[serde(default)]
    pub hook: Option<HookConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buttons: default_buttons(),
            quick_fills: default_quick_fills(),
            hook: None,
        }
    }
}

impl Config {
    /// Parse a config from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        debug!(
            path = %path.display(),
            buttons = config.buttons.len(),
            quick_fills = config.quick_fills.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Load `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve a button reference: a 1-based index, or an exact display text.
    pub fn find_button(&self, reference: &str) -> Result<usize> {
        if let Some(index) = self
            .buttons
            .iter()
            .position(|b| b.display_text == reference)
        {
            return Ok(index);
        }

        reference
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=self.buttons.len()).contains(n))
            .map(|n| n - 1)
            .ok_or_else(|| Error::UnknownButton(reference.to_string()))
    }
}

fn default_buttons() -> Vec<ButtonDescriptor> {
    vec![
        ButtonDescriptor::new("Button 1", "You picked button one"),
        ButtonDescriptor::new("Button 2", "You picked button two"),
        ButtonDescriptor::new("Button 3", "You picked button three"),
        ButtonDescriptor::new("Button 4", "You picked button four"),
        ButtonDescriptor::new("Button 5", "You picked button five"),
        ButtonDescriptor::new("Button 7", "You picked button seven"),
        ButtonDescriptor::new("Button 1000", "You found the special button"),
        ButtonDescriptor::new("No number", "This button carries no number"),
    ]
}

fn default_quick_fills() -> Vec<QuickFill> {
    vec![
        QuickFill::new("Sample Text 1", "Hello FileMaker Developers!"),
        QuickFill::new("Sample Text 2", "React is like FileMaker for UI!"),
        QuickFill::new("Sample Text 3", "Single Source of Truth"),
    ]
}
