//! Value generators for primitive types, strings, enums and candidate sets.
//!
//! Every bounded generator validates its bounds when constructed, so a
//! malformed range surfaces as [`GenerateError::InvalidConfiguration`] before
//! any instance is generated.

use std::marker::PhantomData;

use crate::config::GenerateConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::generator::Generator;
use crate::sample::Enumerated;

/// Generator for boolean values
#[derive(Debug, Clone)]
pub struct BoolGenerator;

impl Generator<bool> for BoolGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> bool {
        use rand::Rng;
        rng.r#gen()
    }
}

/// Generator for integer types with inclusive range constraints
#[derive(Debug, Clone)]
pub struct IntGenerator<T> {
    min: T,
    max: T,
}

impl<T> IntGenerator<T>
where
    T: Copy + PartialOrd + std::fmt::Display,
{
    /// Create a new integer generator drawing uniformly from `[min, max]`
    pub fn new(min: T, max: T) -> GenerateResult<Self> {
        if min > max {
            return Err(GenerateError::invalid_configuration(format!(
                "integer bound min {} is greater than max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }
}

macro_rules! impl_int_generator {
    ($($t:ty),*) => {
        $(
            impl Generator<$t> for IntGenerator<$t> {
                fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> $t {
                    use rand::Rng;
                    rng.gen_range(self.min..=self.max)
                }
            }

            impl IntGenerator<$t> {
                /// Create a generator for the full range of the type
                pub fn full_range() -> Self {
                    Self { min: <$t>::MIN, max: <$t>::MAX }
                }
            }
        )*
    };
}

impl_int_generator!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Generator for floating-point types with inclusive range constraints
#[derive(Debug, Clone)]
pub struct FloatGenerator<T> {
    min: T,
    max: T,
}

impl<T> FloatGenerator<T>
where
    T: Copy + PartialOrd + std::fmt::Display,
{
    /// Create a new float generator drawing uniformly from `[min, max]`
    ///
    /// NaN bounds are rejected along with inverted ranges.
    pub fn new(min: T, max: T) -> GenerateResult<Self> {
        if !(min <= max) {
            return Err(GenerateError::invalid_configuration(format!(
                "float bound min {} is greater than max {} (or a bound is NaN)",
                min, max
            )));
        }
        Ok(Self { min, max })
    }
}

macro_rules! impl_float_generator {
    ($($t:ty),*) => {
        $(
            impl Generator<$t> for FloatGenerator<$t> {
                fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> $t {
                    use rand::Rng;
                    rng.gen_range(self.min..=self.max)
                }
            }
        )*
    };
}

impl_float_generator!(f32, f64);

/// Generator for character values drawn from configured ranges
#[derive(Debug, Clone)]
pub struct CharGenerator {
    ranges: Vec<(char, char)>,
}

impl CharGenerator {
    /// Create a character generator over ASCII printable characters
    pub fn ascii_printable() -> Self {
        Self {
            ranges: vec![(' ', '~')],
        }
    }

    /// Create a character generator over ASCII alphanumeric characters
    pub fn ascii_alphanumeric() -> Self {
        Self {
            ranges: vec![('0', '9'), ('A', 'Z'), ('a', 'z')],
        }
    }

    /// Create a character generator with custom inclusive ranges
    pub fn with_ranges(ranges: Vec<(char, char)>) -> GenerateResult<Self> {
        if ranges.is_empty() {
            return Err(GenerateError::invalid_configuration(
                "character generator needs at least one range",
            ));
        }
        for (start, end) in &ranges {
            if start > end {
                return Err(GenerateError::invalid_configuration(format!(
                    "character range start {:?} is greater than end {:?}",
                    start, end
                )));
            }
        }
        Ok(Self { ranges })
    }
}

impl Generator<char> for CharGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> char {
        use rand::Rng;
        let range_idx = rng.gen_range(0..self.ranges.len());
        let (start, end) = self.ranges[range_idx];

        let code = rng.gen_range(start as u32..=end as u32);
        char::from_u32(code).unwrap_or(start)
    }
}

/// Generator for strings with an inclusive length range
#[derive(Debug, Clone)]
pub struct StringGenerator {
    char_generator: CharGenerator,
    min_length: usize,
    max_length: usize,
}

impl StringGenerator {
    /// Create a string generator over ASCII printable characters
    pub fn ascii_printable(min_length: usize, max_length: usize) -> GenerateResult<Self> {
        Self::with_char_generator(CharGenerator::ascii_printable(), min_length, max_length)
    }

    /// Create a string generator over ASCII alphanumeric characters
    pub fn ascii_alphanumeric(min_length: usize, max_length: usize) -> GenerateResult<Self> {
        Self::with_char_generator(CharGenerator::ascii_alphanumeric(), min_length, max_length)
    }

    /// Create a string generator with a custom character generator
    pub fn with_char_generator(
        char_generator: CharGenerator,
        min_length: usize,
        max_length: usize,
    ) -> GenerateResult<Self> {
        if min_length > max_length {
            return Err(GenerateError::invalid_configuration(format!(
                "string length min {} is greater than max {}",
                min_length, max_length
            )));
        }
        Ok(Self {
            char_generator,
            min_length,
            max_length,
        })
    }
}

impl Generator<String> for StringGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GenerateConfig) -> String {
        use rand::Rng;
        let length = rng.gen_range(self.min_length..=self.max_length);
        (0..length)
            .map(|_| self.char_generator.generate(rng, config))
            .collect()
    }
}

/// Generator that chooses uniformly from a supplied candidate set
#[derive(Debug, Clone)]
pub struct OneOfGenerator<T> {
    values: Vec<T>,
}

impl<T: Clone> OneOfGenerator<T> {
    /// Create a new one-of generator over a non-empty candidate set
    pub fn new(values: Vec<T>) -> GenerateResult<Self> {
        if values.is_empty() {
            return Err(GenerateError::invalid_configuration(
                "candidate set must not be empty",
            ));
        }
        Ok(Self { values })
    }
}

impl<T: Clone + 'static> Generator<T> for OneOfGenerator<T> {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> T {
        use rand::Rng;
        let index = rng.gen_range(0..self.values.len());
        self.values[index].clone()
    }
}

/// Generator that chooses uniformly from an enum's declared variants
///
/// The variant set comes from the [`Enumerated`] impl emitted by
/// `#[derive(Sample)]` for fieldless enums.
#[derive(Debug, Clone)]
pub struct EnumGenerator<E> {
    _marker: PhantomData<E>,
}

impl<E: Enumerated> EnumGenerator<E> {
    /// Create a new enum generator, rejecting enums with no variants
    pub fn new() -> GenerateResult<Self> {
        if E::variants().is_empty() {
            return Err(GenerateError::invalid_configuration(
                "enum has no variants to draw from",
            ));
        }
        Ok(Self {
            _marker: PhantomData,
        })
    }
}

impl<E: Enumerated + Clone + 'static> Generator<E> for EnumGenerator<E> {
    fn generate(&self, rng: &mut dyn rand::RngCore, _config: &GenerateConfig) -> E {
        use rand::Rng;
        let variants = E::variants();
        variants[rng.gen_range(0..variants.len())].clone()
    }
}
