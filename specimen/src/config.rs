//! Configuration for default value generation.

use crate::error::{GenerateError, GenerateResult};

/// Bounds used when a field has no explicit binding
///
/// Integer fields draw from `[int_min, int_max]` clamped to the field's type,
/// float fields from `[float_min, float_max]`, and string fields get a random
/// length in `[string_min_len, string_max_len]` unless their name matches one
/// of the fake-data tables.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    /// Inclusive lower bound for unbound integer fields
    pub int_min: i64,
    /// Inclusive upper bound for unbound integer fields
    pub int_max: i64,
    /// Inclusive lower bound for unbound float fields
    pub float_min: f64,
    /// Inclusive upper bound for unbound float fields
    pub float_max: f64,
    /// Inclusive minimum length for unbound string fields
    pub string_min_len: usize,
    /// Inclusive maximum length for unbound string fields
    pub string_max_len: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            int_min: 0,
            int_max: 100,
            float_min: 0.0,
            float_max: 100.0,
            string_min_len: 4,
            string_max_len: 16,
        }
    }
}

impl GenerateConfig {
    /// Create a new configuration with validation
    pub fn new(
        int_min: i64,
        int_max: i64,
        float_min: f64,
        float_max: f64,
        string_min_len: usize,
        string_max_len: usize,
    ) -> GenerateResult<Self> {
        let config = Self {
            int_min,
            int_max,
            float_min,
            float_max,
            string_min_len,
            string_max_len,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configured bounds
    pub fn validate(&self) -> GenerateResult<()> {
        if self.int_min > self.int_max {
            return Err(GenerateError::invalid_configuration(format!(
                "int_min {} is greater than int_max {}",
                self.int_min, self.int_max
            )));
        }
        if !(self.float_min <= self.float_max) {
            return Err(GenerateError::invalid_configuration(format!(
                "float_min {} is greater than float_max {} (or a bound is NaN)",
                self.float_min, self.float_max
            )));
        }
        if self.string_min_len > self.string_max_len {
            return Err(GenerateError::invalid_configuration(format!(
                "string_min_len {} is greater than string_max_len {}",
                self.string_min_len, self.string_max_len
            )));
        }
        Ok(())
    }
}
