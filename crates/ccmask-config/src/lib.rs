//! # ccmask-config
//!
//! Environment configuration for the ccmask compiler forwarder.
//!
//! The wrapped compiler is named by a single environment variable holding a
//! path template, e.g. `GCC_BINARY_MASK=/opt/local/bin/XXX-mp-4.4`. The `XXX`
//! placeholder is replaced at runtime with the version suffix passed as the
//! first command-line argument, selecting a concrete gcc-mp variant.

use std::env::VarError;
use std::path::PathBuf;

use tracing::debug;

pub mod logging;

/// Environment variable naming the compiler path template.
pub const BINARY_MASK_VAR: &str = "GCC_BINARY_MASK";

/// Placeholder substring replaced with the caller-supplied version suffix.
pub const PLACEHOLDER: &str = "XXX";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GCC_BINARY_MASK environment variable is not set")]
    MissingMask,
    #[error("GCC_BINARY_MASK environment variable is not valid UTF-8")]
    InvalidMask,
}

/// Process-lifetime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Compiler path template containing the `XXX` placeholder.
    pub binary_mask: String,
}

impl Config {
    /// Load config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(BINARY_MASK_VAR) {
            Ok(binary_mask) => {
                debug!(mask = %binary_mask, "Loaded compiler mask");
                Ok(Self { binary_mask })
            }
            Err(VarError::NotPresent) => Err(ConfigError::MissingMask),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidMask),
        }
    }

    /// Resolve the concrete compiler path for a version suffix.
    ///
    /// Every occurrence of the placeholder in the template is substituted.
    pub fn resolve(&self, suffix: &str) -> PathBuf {
        PathBuf::from(self.binary_mask.replace(PLACEHOLDER, suffix))
    }
}
