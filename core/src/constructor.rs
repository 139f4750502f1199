//! Variant constructors synthesized when a sum type is sealed.

use std::fmt;
use std::sync::{Arc, Weak};

use tagged_types::{Name, SumTypeId, VariantTag};

use crate::errors::SumTypeError;
use crate::instance::VariantInstance;
use crate::spec::ValidatedSpec;
use crate::sum_type::{SumType, SumTypeInner};

/// The only way to produce values of a sealed sum type.
///
/// A constructor is a cheap shared handle. Clones compare equal to each other
/// and to the constructor stored in the owning [`SumType`]; constructors of
/// different variants (or of different sum types) never compare equal.
#[derive(Clone)]
pub struct VariantConstructor {
    inner: Arc<ConstructorInner>,
}

struct ConstructorInner {
    name: Name,
    fields: Vec<Name>,
    tag: VariantTag,
    sum_type_id: SumTypeId,
    sum_type_name: Name,
    owner: Weak<SumTypeInner>,
}

impl VariantConstructor {
    /// Bind a validated declaration to its sum type.
    pub(crate) fn synthesize(owner: &SumType, tag: VariantTag, spec: ValidatedSpec) -> Self {
        Self {
            inner: Arc::new(ConstructorInner {
                name: spec.name,
                fields: spec.fields,
                tag,
                sum_type_id: owner.id(),
                sum_type_name: owner.name().clone(),
                owner: owner.downgrade(),
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.inner.name
    }

    /// Declared field names, in positional order.
    #[must_use]
    pub fn fields(&self) -> &[Name] {
        &self.inner.fields
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.inner.fields.len()
    }

    #[must_use]
    pub fn tag(&self) -> VariantTag {
        self.inner.tag
    }

    #[must_use]
    pub fn sum_type_id(&self) -> SumTypeId {
        self.inner.sum_type_id
    }

    #[must_use]
    pub fn sum_type_name(&self) -> &Name {
        &self.inner.sum_type_name
    }

    /// The owning sum type, if any handle to it is still alive.
    #[must_use]
    pub fn owner(&self) -> Option<SumType> {
        self.inner.owner.upgrade().map(SumType::from_inner)
    }

    #[must_use]
    pub fn is_variant_of(&self, sum_type: &SumType) -> bool {
        self.inner.sum_type_id == sum_type.id()
    }

    /// Position of `field` within this variant, if declared.
    #[must_use]
    pub fn field_index(&self, field: &str) -> Option<usize> {
        self.inner.fields.iter().position(|name| name == field)
    }

    /// Build an instance from exactly [`arity`](Self::arity) values, assigned positionally.
    pub fn construct<V, I>(&self, values: I) -> Result<VariantInstance<V>, SumTypeError>
    where
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if values.len() != self.arity() {
            return Err(SumTypeError::Arity {
                variant: self.inner.name.clone(),
                expected: self.arity(),
                actual: values.len(),
            });
        }
        Ok(VariantInstance::new(self.clone(), values))
    }

    pub(crate) fn same_as(&self, other: &VariantConstructor) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for VariantConstructor {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for VariantConstructor {}

impl fmt::Debug for VariantConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantConstructor")
            .field("sum_type", &self.inner.sum_type_name.as_str())
            .field("name", &self.inner.name.as_str())
            .field("fields", &self.inner.fields)
            .field("tag", &self.inner.tag.index())
            .finish()
    }
}

/// Renders the constructor signature, e.g. `Both(x, y)`.
impl fmt::Display for VariantConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.inner.name)?;
        for (index, field) in self.inner.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::SumTypeError;
    use crate::sum_type::SumType;

    fn these() -> SumType {
        let these = SumType::new("These").expect("non-empty name");
        these
            .seal(
                these
                    .declare()
                    .variant("This", ["x"])
                    .variant("That", ["y"])
                    .variant("Both", ["x", "y"]),
            )
            .expect("fresh sum type seals");
        these
    }

    #[test]
    fn metadata_reflects_declaration() {
        let these = these();
        let both = these.variant("Both").expect("declared");
        assert_eq!(both.name(), "Both");
        assert_eq!(both.arity(), 2);
        assert_eq!(both.tag().index(), 2);
        assert_eq!(both.sum_type_name(), "These");
        assert_eq!(both.field_index("y"), Some(1));
        assert_eq!(both.field_index("z"), None);
        assert_eq!(both.to_string(), "Both(x, y)");
    }

    #[test]
    fn construct_checks_arity() {
        let these = these();
        let this = these.variant("This").expect("declared");

        let err = this
            .construct(Vec::<i32>::new())
            .expect_err("missing value must be rejected");
        assert!(matches!(
            err,
            SumTypeError::Arity {
                expected: 1,
                actual: 0,
                ..
            }
        ));

        let err = this
            .construct([1, 2])
            .expect_err("extra value must be rejected");
        assert!(matches!(
            err,
            SumTypeError::Arity {
                expected: 1,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn clones_share_identity() {
        let these = these();
        let this = these.variant("This").expect("declared");
        let that = these.variant("That").expect("declared");
        assert_eq!(this.clone(), *this);
        assert_ne!(this, that);
    }

    #[test]
    fn owner_is_a_weak_back_reference() {
        let these = these();
        let both = these.variant("Both").expect("declared").clone();
        assert_eq!(both.owner().map(|owner| owner.id()), Some(these.id()));
        assert!(both.is_variant_of(&these));

        drop(these);
        assert!(both.owner().is_none());
        assert!(both.construct([1, 2]).is_ok());
    }
}
