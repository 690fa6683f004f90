//! Derive macro for the specimen test-data generation library
//!
//! This crate provides the `#[derive(Sample)]` macro, which emits the
//! per-type schema and default-generation impls that the specimen graph
//! walker consults instead of runtime reflection.

use proc_macro::TokenStream;

mod derive;

/// Derive macro implementing `Sample` (and, for structs, `Composite`)
///
/// Applied to a struct with named fields, the macro emits:
///
/// - a `specimen::Composite` impl describing every **public** field that is
///   not marked `#[sample(skip)]`, in declaration order;
/// - a `specimen::Sample` impl that builds an instance by walking that
///   schema, starting from `Default::default()`.
///
/// Non-public and skipped fields keep whatever `Default::default()` assigned,
/// so the type must implement `Default`.
///
/// ```rust
/// use specimen::{Rand, Sample};
///
/// #[derive(Debug, Default, Sample)]
/// struct Account {
///     pub name: String,
///     pub age: u8,
///     #[sample(skip)]
///     pub audit_token: String,
///     internal_id: u64,
/// }
///
/// let account: Account = Rand::with_seed(7).one();
/// assert!(account.audit_token.is_empty());
/// assert_eq!(account.internal_id, 0);
/// ```
///
/// Applied to an enum, the macro emits a `Sample` impl that picks a uniform
/// variant, generating any payload fields recursively. Fieldless enums
/// additionally get a `specimen::Enumerated` impl listing their variants,
/// which is what `EnumGenerator` draws from:
///
/// ```rust
/// use specimen::Sample;
///
/// #[derive(Debug, Clone, Sample)]
/// enum Status {
///     Active,
///     Suspended,
///     Closed,
/// }
/// ```
///
/// Unions and tuple structs are not supported.
#[proc_macro_derive(Sample, attributes(sample))]
pub fn derive_sample(input: TokenStream) -> TokenStream {
    derive::derive_sample_impl(input)
}
