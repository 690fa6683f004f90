//! The object graph walker.

use crate::binding::Binding;
use crate::config::GenerateConfig;
use crate::schema::Composite;

/// Build one instance of `T`, honoring any per-field bindings
///
/// Starts from `T::default()` and fills every schema field in declaration
/// order: a field with a binding uses the binding's generator, anything else
/// falls back to its type's default generation, which recurses into nested
/// composite fields. Fields outside the schema keep their `default()` value.
///
/// Recursion depth is bounded only by the type graph; building a type whose
/// composite fields form a cycle (through `Box` indirection) will not
/// terminate, and avoiding that is the caller's responsibility.
pub fn populate<T: Composite>(
    bindings: &[Binding<T>],
    rng: &mut dyn rand::RngCore,
    config: &GenerateConfig,
) -> T {
    let mut value = T::default();
    for field in T::fields() {
        match bindings.iter().find(|b| b.key() == field.key()) {
            Some(binding) => binding.write(&mut value, rng, config),
            None => field.fill(&mut value, rng, config),
        }
    }
    value
}
