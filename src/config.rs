//! Runtime configuration for the hash generator.
//! Resolves the plaintext and bcrypt work factor from command-line
//! arguments, environment variables, or the built-in defaults.

use std::env;

/// Plaintext hashed when neither an argument nor HASH_PLAINTEXT is given
const DEFAULT_PLAINTEXT: &str = "Admin123!HMA";

/// Work factor used when neither an argument nor HASH_COST is given
const DEFAULT_COST: u32 = 12;

/// Error type for configuration resolution
#[derive(Debug)]
pub enum ConfigError {
    InvalidCost(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidCost(value) => {
                write!(f, "work factor must be a non-negative integer, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Hashing parameters for a single invocation
pub struct HashConfig {
    pub plaintext: String,
    pub cost: u32,
}

impl HashConfig {
    /// Resolve configuration for this invocation.
    /// Positional arguments win over environment variables, which win
    /// over the built-in defaults:
    ///   generate-hash [PLAINTEXT] [COST]
    pub fn from_env_and_args() -> Result<Self, ConfigError> {
        let args: Vec<String> = env::args().collect();

        let plaintext = args.get(1).cloned().or_else(|| env::var("HASH_PLAINTEXT").ok());
        let cost = args.get(2).cloned().or_else(|| env::var("HASH_COST").ok());

        Self::resolve(plaintext, cost)
    }

    /// Apply defaults and parse the work factor. A cost that parses but
    /// falls outside bcrypt's supported range is left for the hashing
    /// primitive itself to reject.
    fn resolve(plaintext: Option<String>, cost: Option<String>) -> Result<Self, ConfigError> {
        let plaintext = plaintext.unwrap_or_else(|| DEFAULT_PLAINTEXT.to_string());

        let cost = match cost {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidCost(raw.clone()))?,
            None => DEFAULT_COST,
        };

        Ok(HashConfig { plaintext, cost })
    }
}
