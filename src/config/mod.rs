//! Route table configuration.
//!
//! Hosts can define the route table in a TOML file instead of code:
//!
//! ```toml
//! base_title = "Physics 110: Introductory Mechanics"
//! fallback = "home"
//!
//! [routes.home]
//! section = "home-section"
//!
//! [routes.lectures]
//! section = "lectures-section"
//! title = "Lectures - Physics 110: Introductory Mechanics"
//! ```
//!
//! Unknown keys warn but load; structural problems (no routes, fallback not
//! in the table) fail with [`ConfigError`] so a router can never be built
//! with an unsound fallback.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::log;
use crate::route::{RouteTable, RouteTableError};

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Table(#[from] RouteTableError),
}

// ============================================================================
// NavConfig
// ============================================================================

/// Root configuration for a navigation table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Base document title, used for routes without a configured title
    pub base_title: String,

    /// Route key used when the hash is empty or unrecognized
    pub fallback: String,

    /// Route key -> target section (and optional title)
    pub routes: BTreeMap<String, RouteConfig>,
}

/// One `[routes.<key>]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Id of the section element this route shows
    pub section: String,

    /// Configured page title for this route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            base_title: String::new(),
            fallback: "home".to_string(),
            routes: BTreeMap::from([(
                "home".to_string(),
                RouteConfig {
                    section: "home-section".to_string(),
                    title: None,
                },
            )]),
        }
    }
}

impl NavConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&raw)
    }

    /// Parse and validate TOML content. Unknown fields warn but load.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(raw)?;
        for field in &ignored {
            log!("config"; "unknown config key `{field}`, ignoring");
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(raw: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(raw);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.routes.is_empty() {
            return Err(ConfigError::Validation("no routes defined".to_string()));
        }
        if !self.routes.contains_key(&self.fallback) {
            return Err(ConfigError::Validation(format!(
                "fallback route `{}` is not defined in [routes]",
                self.fallback
            )));
        }
        for (key, route) in &self.routes {
            if route.section.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "route `{key}` has an empty section id"
                )));
            }
        }
        Ok(())
    }

    /// Build the immutable route table this config describes.
    pub fn to_table(&self) -> Result<RouteTable, ConfigError> {
        let mut builder = RouteTable::builder(&self.fallback).base_title(&self.base_title);
        for (key, route) in &self.routes {
            builder = match &route.title {
                Some(title) => builder.titled_route(key, &route.section, title),
                None => builder.route(key, &route.section),
            };
        }
        Ok(builder.build()?)
    }
}
