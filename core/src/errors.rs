//! Errors raised while defining sum types and constructing their values.
//!
//! Every error here is a usage error detected at the call site. None of them
//! are transient and none leave partially-mutated state behind.

use tagged_types::Name;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumTypeError {
    #[error("a sum type must have a name")]
    NameRequired,
    #[error("sum type `{name}` is already sealed; its variants cannot be redefined")]
    AlreadySealed { name: Name },
    #[error("invalid variants for sum type `{name}`: {reason}")]
    InvalidSpec { name: Name, reason: SpecDefect },
    #[error("sum type `{name}` can only be sealed with variants declared through its own builder")]
    TypeMismatch { name: Name },
    #[error("sum type `{name}` cannot be instantiated; use one of its variant constructors")]
    Instantiation { name: Name },
    #[error("variant `{variant}` takes {expected} value(s), got {actual}")]
    Arity {
        variant: Name,
        expected: usize,
        actual: usize,
    },
    #[error("sum type `{name}` has no variant named `{variant}`")]
    UnknownVariant { name: Name, variant: String },
}

/// Why a sequence of variant declarations was rejected at seal time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecDefect {
    #[error("at least one variant must be declared")]
    Empty,
    #[error("variant #{position} has an empty name")]
    EmptyVariantName { position: usize },
    #[error("variant `{variant}` has an empty field name at position {position}")]
    EmptyFieldName { variant: Name, position: usize },
    #[error("variant `{variant}` declares field `{field}` more than once")]
    DuplicateField { variant: Name, field: Name },
    #[error("variant `{variant}` is declared more than once")]
    DuplicateVariant { variant: Name },
}
