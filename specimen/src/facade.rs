//! The `Rand` facade: generate one or many instances from an owned RNG.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::binding::Binding;
use crate::config::GenerateConfig;
use crate::sample::Sample;
use crate::schema::Composite;
use crate::walker;

/// Entry point for generating test data
///
/// Owns the randomness source and the default-generation bounds. Seed it for
/// reproducible output:
///
/// ```
/// use specimen::Rand;
///
/// let mut rand = Rand::with_seed(42);
/// let values: Vec<u32> = rand.many(3);
/// assert_eq!(values, Rand::with_seed(42).many::<u32>(3));
/// ```
///
/// `Rand` is deliberately not thread-safe; callers generating from multiple
/// threads construct one `Rand` per thread.
#[derive(Debug)]
pub struct Rand {
    rng: StdRng,
    config: GenerateConfig,
}

impl Rand {
    /// Create a facade with an entropy-seeded RNG and default bounds
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            config: GenerateConfig::default(),
        }
    }

    /// Create a facade with a fixed seed for reproducible generation
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config: GenerateConfig::default(),
        }
    }

    /// Create an entropy-seeded facade with custom default bounds
    pub fn with_config(config: GenerateConfig) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            config,
        }
    }

    /// Create a seeded facade with custom default bounds
    pub fn with_seed_and_config(seed: u64, config: GenerateConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    /// The default-generation bounds in use
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Generate one instance using default generation
    pub fn one<T: Sample>(&mut self) -> T {
        T::build(&mut self.rng, &self.config)
    }

    /// Generate `count` independent instances using default generation
    ///
    /// `count == 0` yields an empty vec. Instances are uncorrelated, so
    /// duplicates are expected under small bound ranges.
    pub fn many<T: Sample>(&mut self, count: usize) -> Vec<T> {
        (0..count).map(|_| self.one()).collect()
    }

    /// Generate one instance, overriding the given fields with bindings
    pub fn one_with<T: Composite>(&mut self, bindings: &[Binding<T>]) -> T {
        walker::populate(bindings, &mut self.rng, &self.config)
    }

    /// Generate `count` independent instances with per-field bindings
    pub fn many_with<T: Composite>(&mut self, count: usize, bindings: &[Binding<T>]) -> Vec<T> {
        (0..count).map(|_| self.one_with(bindings)).collect()
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}
