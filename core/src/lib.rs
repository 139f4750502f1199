//! Runtime closed sum types.
//!
//! A [`SumType`] is created with a name, declared through a [`VariantSpecs`]
//! builder, and sealed exactly once. Sealing synthesizes one
//! [`VariantConstructor`] per declared variant; those constructors are the only
//! way to obtain a [`VariantInstance`] of the type.
//!
//! ```
//! use tagged_core::{SumType, SumValue};
//!
//! let maybe = SumType::new("Maybe")?;
//! maybe.seal(maybe.declare().unit("Nothing").variant("Just", ["x"]))?;
//!
//! let just = maybe.variant("Just").expect("declared above");
//! let value = just.construct([5])?;
//! assert!(value.is_instance_of(just));
//! assert!(value.is_a(&maybe));
//! assert_eq!(value.values().copied().collect::<Vec<_>>(), [5]);
//! # Ok::<(), tagged_core::SumTypeError>(())
//! ```

#![allow(clippy::missing_errors_doc)]

mod constructor;
mod definition;
mod errors;
mod instance;
mod spec;
mod sum_type;

pub use constructor::VariantConstructor;
pub use definition::{SumTypeDefinition, VariantDefinition};
pub use errors::{SpecDefect, SumTypeError};
pub use instance::{SumValue, VariantInstance};
pub use spec::{VariantSpec, VariantSpecs};
pub use sum_type::SumType;

pub use tagged_types::{Name, SumTypeId, VariantTag};
