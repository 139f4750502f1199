//! The sum type itself: a name, an identity, and a variant list that is
//! written exactly once.
//!
//! State machine:
//!
//! ```text
//! Unsealed --seal ok--> Sealed
//! Unsealed --seal err-> Unsealed
//! Sealed   --seal-----> AlreadySealed (no transition)
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use tagged_types::{Name, SumTypeId, VariantTag};

use crate::constructor::VariantConstructor;
use crate::errors::SumTypeError;
use crate::instance::VariantInstance;
use crate::spec::VariantSpecs;

/// A closed sum type.
///
/// `SumType` is a cheap shared handle; clones refer to the same type. The
/// variant list is empty until [`seal`](Self::seal) succeeds and immutable
/// afterwards, so a sealed type can be shared freely across threads.
#[derive(Clone)]
pub struct SumType {
    inner: Arc<SumTypeInner>,
}

pub(crate) struct SumTypeInner {
    id: SumTypeId,
    name: Name,
    variants: OnceLock<Vec<VariantConstructor>>,
}

impl SumType {
    /// Create an unsealed sum type.
    pub fn new(name: impl Into<String>) -> Result<Self, SumTypeError> {
        let name = Name::new(name).map_err(|_err| SumTypeError::NameRequired)?;
        Ok(Self {
            inner: Arc::new(SumTypeInner {
                id: SumTypeId::next(),
                name,
                variants: OnceLock::new(),
            }),
        })
    }

    pub(crate) fn from_inner(inner: Arc<SumTypeInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn downgrade(&self) -> Weak<SumTypeInner> {
        Arc::downgrade(&self.inner)
    }

    #[must_use]
    pub fn id(&self) -> SumTypeId {
        self.inner.id
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.inner.name
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.inner.variants.get().is_some()
    }

    /// Variant constructors in declaration order; empty while unsealed.
    #[must_use]
    pub fn variants(&self) -> &[VariantConstructor] {
        self.inner.variants.get().map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&VariantConstructor> {
        self.variants()
            .iter()
            .find(|constructor| constructor.name() == name)
    }

    /// Start a fresh, empty sequence of variant declarations for this type.
    pub fn declare(&self) -> VariantSpecs {
        VariantSpecs::new(self.inner.id)
    }

    /// Fix the variant set and synthesize one constructor per declaration.
    ///
    /// Either every constructor is created and the type becomes sealed, or an
    /// error is returned and the type is left exactly as it was.
    pub fn seal(&self, specs: VariantSpecs) -> Result<&[VariantConstructor], SumTypeError> {
        if self.is_sealed() {
            tracing::warn!(sum_type = %self.name(), "Rejected attempt to re-seal sum type");
            return Err(self.already_sealed());
        }
        if specs.owner() != self.inner.id {
            tracing::warn!(
                sum_type = %self.name(),
                "Rejected variants declared for a different sum type"
            );
            return Err(SumTypeError::TypeMismatch {
                name: self.name().clone(),
            });
        }

        let validated = specs.validate().map_err(|reason| SumTypeError::InvalidSpec {
            name: self.name().clone(),
            reason,
        })?;
        let constructors: Vec<_> = validated
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                VariantConstructor::synthesize(self, VariantTag::new(index), spec)
            })
            .collect();
        let count = constructors.len();

        // A concurrent seal may have won between the check above and here.
        if self.inner.variants.set(constructors).is_err() {
            tracing::warn!(sum_type = %self.name(), "Lost a concurrent seal");
            return Err(self.already_sealed());
        }

        tracing::debug!(sum_type = %self.name(), variants = count, "Sealed sum type");
        Ok(self.variants())
    }

    /// Declare and seal in one call from an ordered list of `(name, fields)` pairs.
    pub fn define<I, N, F, S>(&self, variants: I) -> Result<&[VariantConstructor], SumTypeError>
    where
        I: IntoIterator<Item = (N, F)>,
        N: Into<String>,
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let specs = variants
            .into_iter()
            .fold(self.declare(), |specs, (name, fields)| specs.variant(name, fields));
        self.seal(specs)
    }

    /// Construct a value of the named variant.
    pub fn construct<V, I>(
        &self,
        variant: &str,
        values: I,
    ) -> Result<VariantInstance<V>, SumTypeError>
    where
        I: IntoIterator<Item = V>,
    {
        self.variant(variant)
            .ok_or_else(|| SumTypeError::UnknownVariant {
                name: self.name().clone(),
                variant: variant.to_owned(),
            })?
            .construct(values)
    }

    /// Direct construction of the sum type itself. Always fails: the abstract
    /// type has no shape of its own, only its variants do.
    pub fn instantiate<V, I>(&self, _values: I) -> Result<VariantInstance<V>, SumTypeError>
    where
        I: IntoIterator<Item = V>,
    {
        Err(SumTypeError::Instantiation {
            name: self.name().clone(),
        })
    }

    fn already_sealed(&self) -> SumTypeError {
        SumTypeError::AlreadySealed {
            name: self.name().clone(),
        }
    }
}

impl PartialEq for SumType {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for SumType {}

impl fmt::Debug for SumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SumType")
            .field("id", &self.inner.id.value())
            .field("name", &self.inner.name.as_str())
            .field("variants", &self.variants())
            .finish()
    }
}

impl fmt::Display for SumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}
