//! Per-field generator bindings.
//!
//! A [`Binding`] pairs a property selector with a generator, overriding the
//! type-driven default for that field. Selectors are resolved against the
//! target's schema when the binding is constructed, so an invalid selector or
//! a malformed generator fails before any instance is generated.

use crate::config::GenerateConfig;
use crate::error::GenerateResult;
use crate::generator::{ConstantGenerator, Generator};
use crate::primitives::{
    BoolGenerator, EnumGenerator, FloatGenerator, IntGenerator, OneOfGenerator, StringGenerator,
};
use crate::sample::Enumerated;
use crate::schema::{Composite, FieldKey, resolve_selector};

/// A caller-supplied generator bound to one public field of `T`
pub struct Binding<T: Composite> {
    key: FieldKey,
    field_name: &'static str,
    write: Box<dyn Fn(&mut T, &mut dyn rand::RngCore, &GenerateConfig)>,
}

impl<T: Composite> Binding<T> {
    /// Bind an arbitrary generator to the field identified by `selector`
    ///
    /// The selector must be a direct access to a public field, e.g.
    /// `|account| &mut account.name`.
    pub fn new<F, S, G>(selector: S, generator: G) -> GenerateResult<Self>
    where
        F: 'static,
        S: Fn(&mut T) -> &mut F + 'static,
        G: Generator<F> + 'static,
    {
        let (key, field_name) = resolve_selector::<T, F, S>(&selector)?;
        let write = Box::new(
            move |target: &mut T, rng: &mut dyn rand::RngCore, config: &GenerateConfig| {
                *selector(target) = generator.generate(rng, config);
            },
        );
        Ok(Self {
            key,
            field_name,
            write,
        })
    }

    /// Bind a bounded integer generator drawing from `[min, max]`
    pub fn int<F, S>(selector: S, min: F, max: F) -> GenerateResult<Self>
    where
        F: Copy + PartialOrd + std::fmt::Display + 'static,
        S: Fn(&mut T) -> &mut F + 'static,
        IntGenerator<F>: Generator<F>,
    {
        Self::new(selector, IntGenerator::new(min, max)?)
    }

    /// Bind a bounded float generator drawing from `[min, max]`
    pub fn float<F, S>(selector: S, min: F, max: F) -> GenerateResult<Self>
    where
        F: Copy + PartialOrd + std::fmt::Display + 'static,
        S: Fn(&mut T) -> &mut F + 'static,
        FloatGenerator<F>: Generator<F>,
    {
        Self::new(selector, FloatGenerator::new(min, max)?)
    }

    /// Bind a uniform boolean generator
    pub fn boolean<S>(selector: S) -> GenerateResult<Self>
    where
        S: Fn(&mut T) -> &mut bool + 'static,
    {
        Self::new(selector, BoolGenerator)
    }

    /// Bind a printable-string generator with lengths in `[min_len, max_len]`
    pub fn string<S>(selector: S, min_len: usize, max_len: usize) -> GenerateResult<Self>
    where
        S: Fn(&mut T) -> &mut String + 'static,
    {
        Self::new(selector, StringGenerator::ascii_printable(min_len, max_len)?)
    }

    /// Bind a generator drawing uniformly from the enum's declared variants
    pub fn enumeration<E, S>(selector: S) -> GenerateResult<Self>
    where
        E: Enumerated + Clone + 'static,
        S: Fn(&mut T) -> &mut E + 'static,
    {
        Self::new(selector, EnumGenerator::<E>::new()?)
    }

    /// Bind a generator drawing uniformly from a supplied candidate set
    pub fn one_of<F, S>(selector: S, values: Vec<F>) -> GenerateResult<Self>
    where
        F: Clone + 'static,
        S: Fn(&mut T) -> &mut F + 'static,
    {
        Self::new(selector, OneOfGenerator::new(values)?)
    }

    /// Bind a generator that always produces the same value
    pub fn constant<F, S>(selector: S, value: F) -> GenerateResult<Self>
    where
        F: Clone + 'static,
        S: Fn(&mut T) -> &mut F + 'static,
    {
        Self::new(selector, ConstantGenerator::new(value))
    }

    /// Name of the bound field
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Typed identity of the bound field
    pub fn key(&self) -> FieldKey {
        self.key
    }

    /// Generate a value and assign it through the selector
    pub fn write(&self, target: &mut T, rng: &mut dyn rand::RngCore, config: &GenerateConfig) {
        (self.write)(target, rng, config)
    }
}

impl<T: Composite> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("field_name", &self.field_name)
            .field("key", &self.key)
            .finish()
    }
}
