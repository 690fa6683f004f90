//! Core generator trait shared by all value generators.

use crate::config::GenerateConfig;

/// Strategy producing one value per call from the supplied randomness source
///
/// Generators are stateless between invocations apart from their configured
/// bounds; the only mutation is consuming the passed-in RNG.
pub trait Generator<T> {
    /// Generate a value of type T using the provided RNG and configuration
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> T;
}

/// A generator that always produces the same value
#[derive(Debug, Clone)]
pub struct ConstantGenerator<T> {
    value: T,
}

impl<T: Clone> ConstantGenerator<T> {
    /// Create a new constant generator
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone + 'static> Generator<T> for ConstantGenerator<T> {
    fn generate(&self, _rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> T {
        self.value.clone()
    }
}
