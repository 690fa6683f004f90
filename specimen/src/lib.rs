//! # Specimen - Randomized Test Data for Rust
//!
//! Specimen generates randomized instances of your types for tests: derive
//! [`Sample`] on a struct and ask [`Rand`] for one or many instances. Public
//! fields are filled from type-driven defaults — bounded numbers, name-aware
//! fake strings, recursively generated nested structs — and any field can be
//! overridden with a typed per-field [`Binding`].
//!
//! ## Quick Start
//!
//! ```rust
//! use specimen::{Binding, Rand, Sample};
//!
//! #[derive(Debug, Default, Sample)]
//! struct Account {
//!     pub name: String,
//!     pub email: String,
//!     pub age: u8,
//! }
//!
//! let mut rand = Rand::with_seed(42);
//!
//! // Default generation: fake name, well-formed email, bounded age
//! let account: Account = rand.one();
//! assert!(account.email.contains('@'));
//!
//! // Override one field with an explicit bounded generator
//! let bindings = vec![Binding::int(|a: &mut Account| &mut a.age, 21, 65).unwrap()];
//! let adults: Vec<Account> = rand.many_with(10, &bindings);
//! assert!(adults.iter().all(|a| (21..=65).contains(&a.age)));
//! ```

// Public modules
pub mod binding;
pub mod config;
pub mod error;
pub mod facade;
pub mod fake;
pub mod generator;
pub mod primitives;
pub mod sample;
pub mod schema;
pub mod walker;

// Re-export the main public API
pub use binding::Binding;
pub use config::GenerateConfig;
pub use error::{GenerateError, GenerateResult};
pub use facade::Rand;
pub use generator::{ConstantGenerator, Generator};
pub use primitives::{
    BoolGenerator, CharGenerator, EnumGenerator, FloatGenerator, IntGenerator, OneOfGenerator,
    StringGenerator,
};
pub use sample::{Enumerated, Sample};
pub use schema::{Composite, Field, FieldKey};
pub use walker::populate;

// Re-exported for derive-generated code
pub use rand;

// Re-export derive macro when the derive feature is enabled
#[cfg(feature = "derive")]
pub use specimen_derive::Sample;
