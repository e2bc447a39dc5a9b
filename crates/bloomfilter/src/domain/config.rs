//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloomfilter::{BloomConfigBuilder, BloomFilter};
//!
//! let config = BloomConfigBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.001)
//!     .build()
//!     .expect("valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("valid filter");
//! assert_eq!(filter.hash_count(), 10);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::validate_parameters;
use crate::error::{FilterError, Result};

/// Sizing configuration for a Bloom filter
///
/// Fields missing from a JSON document fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BloomConfig {
    /// Expected number of distinct items over the filter's lifetime (n)
    pub expected_items: usize,
    /// Target false positive rate at that load, strictly inside (0, 1)
    pub false_positive_rate: f64,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            expected_items: 1000,
            false_positive_rate: 0.01, // 1%
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self> {
        let config = Self {
            expected_items,
            false_positive_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FilterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_parameters(self.expected_items, self.false_positive_rate)
    }

    /// Builder-style method to set expected items
    pub fn with_expected_items(mut self, n: usize) -> Self {
        self.expected_items = n;
        self
    }

    /// Builder-style method to set the false positive rate
    pub fn with_false_positive_rate(mut self, eps: f64) -> Self {
        self.false_positive_rate = eps;
        self
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    expected_items: Option<usize>,
    false_positive_rate: Option<f64>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected number of items
    pub fn expected_items(mut self, n: usize) -> Self {
        self.expected_items = Some(n);
        self
    }

    /// Set target false positive rate
    pub fn false_positive_rate(mut self, eps: f64) -> Self {
        self.false_positive_rate = Some(eps);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig> {
        let defaults = BloomConfig::default();

        let config = BloomConfig {
            expected_items: self.expected_items.unwrap_or(defaults.expected_items),
            false_positive_rate: self
                .false_positive_rate
                .unwrap_or(defaults.false_positive_rate),
        };

        config.validate()?;
        Ok(config)
    }
}
