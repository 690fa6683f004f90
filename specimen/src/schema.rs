//! Declarative per-type schemas consulted by the graph walker.
//!
//! `#[derive(Sample)]` emits a [`Composite`] impl listing every public,
//! non-skipped field of a struct in declaration order. Each entry carries a
//! [`FieldKey`] — the field's byte offset paired with its type id — which is
//! also how binding selectors are matched back to declared fields.

use std::any::{TypeId, type_name};

use crate::config::GenerateConfig;
use crate::error::{GenerateError, GenerateResult};

/// Typed identity of a struct field: byte offset plus field type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKey {
    offset: usize,
    type_id: TypeId,
}

impl FieldKey {
    /// Create a field key from an `offset_of!` value and the field's type id
    pub fn new(offset: usize, type_id: TypeId) -> Self {
        Self { offset, type_id }
    }
}

/// Schema entry for one generatable field of `T`
pub struct Field<T> {
    name: &'static str,
    key: FieldKey,
    fill: fn(&mut T, &mut dyn rand::RngCore, &GenerateConfig),
}

impl<T> Field<T> {
    /// Create a schema entry; `fill` performs default generation for the field
    pub fn new(
        name: &'static str,
        offset: usize,
        type_id: TypeId,
        fill: fn(&mut T, &mut dyn rand::RngCore, &GenerateConfig),
    ) -> Self {
        Self {
            name,
            key: FieldKey::new(offset, type_id),
            fill,
        }
    }

    /// The field's declared name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's typed identity
    pub fn key(&self) -> FieldKey {
        self.key
    }

    /// Run default generation for this field on `target`
    pub fn fill(&self, target: &mut T, rng: &mut dyn rand::RngCore, config: &GenerateConfig) {
        (self.fill)(target, rng, config)
    }
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("key", &self.key)
            .finish()
    }
}

/// Composite types with a derived field schema
///
/// The `Default` supertrait plays the role of the parameterless constructor:
/// generation starts from `T::default()`, and fields outside the schema
/// (non-`pub` or `#[sample(skip)]`) keep whatever `default()` assigned.
pub trait Composite: Default + Sized + 'static {
    /// The generatable fields of this type, in declaration order
    fn fields() -> Vec<Field<Self>>;
}

/// Resolve a property selector against `T`'s declared schema
///
/// Probes a default instance: the selector must return a reference into the
/// instance whose offset and type match a schema entry. Anything else — a
/// nested field, a reference outside the instance — fails immediately with
/// [`GenerateError::InvalidPropertyExpression`].
pub fn resolve_selector<T, F, S>(selector: &S) -> GenerateResult<(FieldKey, &'static str)>
where
    T: Composite,
    F: 'static,
    S: Fn(&mut T) -> &mut F,
{
    let mut probe = T::default();
    let base = &mut probe as *mut T as usize;
    let slot = selector(&mut probe) as *mut F as usize;
    let offset = slot.wrapping_sub(base);
    let key = FieldKey::new(offset, TypeId::of::<F>());

    T::fields()
        .into_iter()
        .find(|field| field.key() == key)
        .map(|field| (key, field.name()))
        .ok_or_else(|| {
            GenerateError::invalid_property_expression(
                type_name::<T>(),
                "selector must be a direct access to a public field",
            )
        })
}
