//! Error types for loading table configuration.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a [`TableConfig`].
///
/// Lookups and builds never fail; only configuration does.
///
/// [`TableConfig`]: crate::TableConfig
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid TOML or does not match the schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A member was declared with an empty name.
    #[error("member #{index} has an empty name")]
    EmptyMemberName {
        /// Position of the member in the config.
        index: usize,
    },

    /// The same member name appears more than once.
    #[error("duplicate member {0:?}")]
    DuplicateMember(String),
}
