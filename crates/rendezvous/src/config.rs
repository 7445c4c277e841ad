//! TOML configuration for string-membered tables.
//!
//! ```toml
//! strategy = "fnv1a32"
//!
//! [[members]]
//! name = "foo.com"
//!
//! [[members]]
//! name = "bar.net"
//! digest = "bar.net#2"
//! ```
//!
//! A member without a `digest` uses its name's bytes, exactly like
//! [`Builder::add_string_members`].

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::Builder;
use crate::digest::Fnv1a32;
use crate::error::ConfigError;
use crate::table::Table;

/// Which built-in scoring strategy a config selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// FNV-1a 64 over key then digest; tables keep the default strategy.
    #[default]
    Fnv1a64,
    /// FNV-1a 32 over key then digest, widened to 64 bits.
    Fnv1a32,
}

/// Top-level table configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Scoring strategy.
    pub strategy: StrategyKind,
    /// Members, in entry order.
    pub members: Vec<MemberConfig>,
}

/// A `[[members]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberConfig {
    /// Member name, returned by lookups.
    pub name: String,
    /// Digest material. Defaults to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl TableConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        debug!(
            members = config.members.len(),
            strategy = ?config.strategy,
            "loaded table config"
        );
        Ok(config)
    }

    /// Read, parse, and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Check that every member has a non-empty, unique name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.members.len());
        for (index, member) in self.members.iter().enumerate() {
            if member.name.is_empty() {
                return Err(ConfigError::EmptyMemberName { index });
            }
            if !seen.insert(member.name.as_str()) {
                return Err(ConfigError::DuplicateMember(member.name.clone()));
            }
        }
        Ok(())
    }

    /// A builder preloaded with this config's strategy and members.
    pub fn builder(&self) -> Builder<String> {
        let mut builder = Builder::new();
        match self.strategy {
            StrategyKind::Fnv1a64 => {}
            StrategyKind::Fnv1a32 => {
                builder.hash32(Fnv1a32::new);
            }
        }

        for member in &self.members {
            let digest = member.digest.as_ref().unwrap_or(&member.name);
            builder.add_member(member.name.clone(), digest.clone());
        }
        builder
    }

    /// Build the table this config describes.
    pub fn build(&self) -> Table<String> {
        self.builder().build()
    }
}
