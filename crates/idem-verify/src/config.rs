//! Verifier configuration
//!
//! Layering: defaults, then a `.toml` or `.json` file, then `IDEM_*`
//! environment variables, then individual `key=value` overrides.

use idem_core::{IdemError, IdemResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "IDEM_";

/// Keys read from the environment, lowercased after the prefix.
const KEYS: [&str; 6] = [
    "random_samples",
    "seed",
    "max_pairs",
    "max_power",
    "max_violations",
    "fail_fast",
];

/// Tuning knobs for a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Elements drawn from a generator per run
    pub random_samples: usize,
    /// Seed for the sampling RNG
    pub seed: u64,
    /// Upper bound on ordered pairs evaluated per identity
    pub max_pairs: usize,
    /// Largest exponent checked by `power-stable`
    pub max_power: u32,
    /// Violations kept in the report; later ones are only counted
    pub max_violations: usize,
    /// Stop after the first identity that reports a violation
    pub fail_fast: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            random_samples: 64,
            seed: 0x1de,
            max_pairs: 4096,
            max_power: 8,
            max_violations: 32,
            fail_fast: false,
        }
    }
}

impl VerifierConfig {
    /// Load configuration from a `.toml` or `.json` file.
    pub fn load_from_file(path: &Path) -> IdemResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| IdemError::config(format!("Failed to read config file: {e}")))?;

        let config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| IdemError::config(format!("Invalid TOML: {e}")))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| IdemError::config(format!("Invalid JSON: {e}")))?,
            _ => return Err(IdemError::config("Unsupported file format")),
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply `IDEM_*` environment overrides.
    pub fn merge_with_env(&mut self) -> IdemResult<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply overrides from `(name, value)` pairs named like environment variables.
    pub fn merge_with_vars<I>(&mut self, vars: I) -> IdemResult<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            if let Some(key) = name.strip_prefix(ENV_PREFIX) {
                let key = key.to_ascii_lowercase();
                if KEYS.contains(&key.as_str()) {
                    self.set_from_string(&key, &value)?;
                }
            }
        }
        Ok(())
    }

    /// Set a single value by key (`snake_case` or `kebab-case`).
    pub fn set_from_string(&mut self, key: &str, value: &str) -> IdemResult<()> {
        match key.replace('-', "_").as_str() {
            "random_samples" => self.random_samples = parse(key, value)?,
            "seed" => self.seed = parse(key, value)?,
            "max_pairs" => self.max_pairs = parse(key, value)?,
            "max_power" => self.max_power = parse(key, value)?,
            "max_violations" => self.max_violations = parse(key, value)?,
            "fail_fast" => self.fail_fast = parse(key, value)?,
            _ => {
                let message = format!("Unknown configuration key: {key}");
                return Err(IdemError::config(message));
            }
        }
        Ok(())
    }

    /// Reject values that would make a run vacuous.
    pub fn validate(&self) -> IdemResult<()> {
        if self.random_samples == 0 {
            return Err(IdemError::config("random_samples cannot be 0"));
        }
        if self.max_pairs == 0 {
            return Err(IdemError::config("max_pairs cannot be 0"));
        }
        if self.max_power == 0 {
            return Err(IdemError::config("max_power cannot be 0"));
        }
        if self.max_violations == 0 {
            return Err(IdemError::config("max_violations cannot be 0"));
        }
        Ok(())
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> IdemResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| IdemError::config(format!("Invalid value for {key}: {value}")))
}
