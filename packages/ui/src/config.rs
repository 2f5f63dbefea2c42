//! # Application configuration: `intellicoach.toml`
//!
//! Site metadata and the display font live in `intellicoach.toml` next to this
//! crate's manifest. The file is embedded at compile time and parsed once by
//! [`AppConfig::load`] when the shell mounts.
//!
//! ## Structure
//!
//! ```toml
//! [site]
//! title = "IntelliCoach"
//! description = "Your very own personalized AI interview coach"
//! lang = "en"
//!
//! [font]
//! family = "Raleway"
//! weights = [100, 200, 300, 400, 500, 600, 700, 800, 900]
//! ```
//!
//! Every section derives `Default`, so a missing key or section is the same
//! as the built-in value. A file that fails to parse is logged and replaced
//! by [`AppConfig::default`].

use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!("../intellicoach.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration stored in `intellicoach.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub font: FontConfig,
}

/// Document metadata.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Value of the `lang` attribute on the root `<html>` element.
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_title() -> String {
    "IntelliCoach".to_string()
}

fn default_description() -> String {
    "Your very own personalized AI interview coach".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            lang: default_lang(),
        }
    }
}

impl SiteConfig {
    /// Script that sets the document language once the page is mounted.
    pub fn lang_script(&self) -> String {
        format!("document.documentElement.lang = {:?};", self.lang)
    }
}

/// Display font loaded from Google Fonts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FontConfig {
    #[serde(default = "default_family")]
    pub family: String,
    #[serde(default = "default_weights")]
    pub weights: Vec<u16>,
}

fn default_family() -> String {
    "Raleway".to_string()
}

fn default_weights() -> Vec<u16> {
    (1..=9).map(|w| w * 100).collect()
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: default_family(),
            weights: default_weights(),
        }
    }
}

impl FontConfig {
    /// Google Fonts CSS2 stylesheet URL for this family and its weights.
    pub fn stylesheet_url(&self) -> String {
        let family = self.family.trim().replace(' ', "+");
        let mut weights = self.weights.clone();
        weights.sort_unstable();
        weights.dedup();

        if weights.is_empty() {
            return format!("https://fonts.googleapis.com/css2?family={family}&display=swap");
        }

        let weights = weights
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(";");
        format!("https://fonts.googleapis.com/css2?family={family}:wght@{weights}&display=swap")
    }

    /// CSS `font-family` value with a generic fallback.
    pub fn css_family(&self) -> String {
        format!("'{}', sans-serif", self.family)
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "intellicoach.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse the embedded config file, falling back to defaults.
    pub fn load() -> Self {
        match Self::from_toml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", Self::filename(), e);
                Self::default()
            }
        }
    }
}

/// The configuration provided by [`crate::AppShell`], or the embedded file
/// when rendered outside the shell.
pub fn use_app_config() -> AppConfig {
    try_use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}
