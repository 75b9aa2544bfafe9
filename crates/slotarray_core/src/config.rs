//! # Array Configuration
//!
//! Tuning for `DynamicArray` construction, deserialized from TOML.
//!
//! ```toml
//! initial_capacity = 8
//! ```

use crate::error::{ArrayError, ArrayResult};
use serde::{Deserialize, Serialize};

/// Configuration for dynamic array construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Slot count of the first backing store.
    ///
    /// Must be a power of two so that every later capacity stays
    /// reachable from 1 by doubling.
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Default initial capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1;

    /// Largest accepted initial capacity: 16M slots.
    pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

    /// Parses a config from a TOML document and validates it.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the document does not parse, or
    /// `InvalidArgument` if a value fails validation.
    pub fn from_toml_str(source: &str) -> ArrayResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| ArrayError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `initial_capacity` is not a power of
    /// two or exceeds `MAX_INITIAL_CAPACITY`.
    pub fn validate(&self) -> ArrayResult<()> {
        if !self.initial_capacity.is_power_of_two() {
            return Err(ArrayError::InvalidArgument(format!(
                "initial capacity must be a power of two, got {}",
                self.initial_capacity
            )));
        }
        if self.initial_capacity > Self::MAX_INITIAL_CAPACITY {
            return Err(ArrayError::InvalidArgument(format!(
                "initial capacity {} exceeds maximum {}",
                self.initial_capacity,
                Self::MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }
}
