//! Builder surface for declaring the variants of a sum type.
//!
//! Declarations are accumulated verbatim and only validated when the builder
//! is handed to [`SumType::seal`](crate::SumType::seal), so a chain of
//! `variant` calls never needs intermediate error handling.

use std::collections::HashSet;
use std::slice;

use tagged_types::{Name, SumTypeId};

use crate::errors::SpecDefect;

/// One declared variant, as written by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    name: String,
    fields: Vec<String>,
}

impl VariantSpec {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// A variant that passed validation; consumed by the constructor factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidatedSpec {
    pub(crate) name: Name,
    pub(crate) fields: Vec<Name>,
}

/// Ordered accumulation of variant declarations for one sum type.
///
/// Obtained from [`SumType::declare`](crate::SumType::declare) and consumed by
/// [`SumType::seal`](crate::SumType::seal). A builder remembers which sum type
/// started it; sealing a different sum type with it is a type mismatch.
#[derive(Debug, Clone)]
#[must_use = "variant declarations have no effect until the builder is sealed"]
pub struct VariantSpecs {
    owner: SumTypeId,
    entries: Vec<VariantSpec>,
}

impl VariantSpecs {
    pub(crate) fn new(owner: SumTypeId) -> Self {
        Self {
            owner,
            entries: Vec::new(),
        }
    }

    /// Declare a variant with the given ordered field names.
    pub fn variant<N, I, F>(mut self, name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.entries.push(VariantSpec {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Declare a variant without fields.
    pub fn unit(self, name: impl Into<String>) -> Self {
        self.variant(name, Vec::<String>::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, VariantSpec> {
        self.entries.iter()
    }

    pub(crate) fn owner(&self) -> SumTypeId {
        self.owner
    }

    /// Check every declaration and convert it into validated form, preserving order.
    pub(crate) fn validate(self) -> Result<Vec<ValidatedSpec>, SpecDefect> {
        if self.entries.is_empty() {
            return Err(SpecDefect::Empty);
        }

        let mut seen_variants = HashSet::with_capacity(self.entries.len());
        let mut validated = Vec::with_capacity(self.entries.len());

        for (position, entry) in self.entries.into_iter().enumerate() {
            let variant =
                Name::new(entry.name).map_err(|_err| SpecDefect::EmptyVariantName { position })?;
            if !seen_variants.insert(variant.clone()) {
                return Err(SpecDefect::DuplicateVariant { variant });
            }

            let mut seen_fields = HashSet::with_capacity(entry.fields.len());
            let mut fields = Vec::with_capacity(entry.fields.len());
            for (position, raw) in entry.fields.into_iter().enumerate() {
                let field = Name::new(raw).map_err(|_err| SpecDefect::EmptyFieldName {
                    variant: variant.clone(),
                    position,
                })?;
                if !seen_fields.insert(field.clone()) {
                    return Err(SpecDefect::DuplicateField { variant, field });
                }
                fields.push(field);
            }

            validated.push(ValidatedSpec {
                name: variant,
                fields,
            });
        }

        Ok(validated)
    }
}

impl<'a> IntoIterator for &'a VariantSpecs {
    type Item = &'a VariantSpec;
    type IntoIter = slice::Iter<'a, VariantSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use tagged_types::SumTypeId;

    use super::VariantSpecs;
    use crate::errors::SpecDefect;

    fn builder() -> VariantSpecs {
        VariantSpecs::new(SumTypeId::next())
    }

    #[test]
    fn declarations_keep_order() {
        let specs = builder()
            .variant("This", ["x"])
            .variant("That", ["y"])
            .variant("Both", ["x", "y"]);

        let names: Vec<_> = specs.iter().map(|spec| spec.name()).collect();
        assert_eq!(names, ["This", "That", "Both"]);
        assert_eq!(specs.len(), 3);
        assert_eq!(
            specs.iter().last().map(|spec| spec.fields().to_vec()),
            Some(vec!["x".to_owned(), "y".to_owned()])
        );
    }

    #[test]
    fn unit_declares_zero_fields() {
        let specs = builder().unit("Nothing");
        let spec = specs.iter().next().expect("one declaration");
        assert_eq!(spec.name(), "Nothing");
        assert!(spec.fields().is_empty());
    }

    #[test]
    fn empty_builder_is_rejected() {
        let specs = builder();
        assert!(specs.is_empty());
        assert_eq!(specs.validate(), Err(SpecDefect::Empty));
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let err = builder()
            .variant("Both", ["x", "x"])
            .validate()
            .expect_err("duplicate field must be rejected");
        assert!(matches!(err, SpecDefect::DuplicateField { ref field, .. } if field == "x"));
    }

    #[test]
    fn duplicate_variant_is_rejected() {
        let err = builder()
            .unit("High")
            .unit("High")
            .validate()
            .expect_err("duplicate variant must be rejected");
        assert!(matches!(err, SpecDefect::DuplicateVariant { ref variant } if variant == "High"));
    }

    #[test]
    fn same_field_name_across_variants_is_allowed() {
        let validated = builder()
            .variant("This", ["x"])
            .variant("Both", ["x", "y"])
            .validate()
            .expect("field names only need to be distinct within a variant");
        assert_eq!(validated.len(), 2);
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(
            builder().unit("Low").unit("  ").validate(),
            Err(SpecDefect::EmptyVariantName { position: 1 })
        );

        let err = builder()
            .variant("Ok", ["value", ""])
            .validate()
            .expect_err("blank field must be rejected");
        assert!(matches!(err, SpecDefect::EmptyFieldName { position: 1, .. }));
    }

    #[test]
    fn names_are_trimmed() {
        let validated = builder()
            .variant(" Just ", [" x"])
            .validate()
            .expect("valid declaration");
        assert_eq!(validated[0].name, "Just");
        assert_eq!(validated[0].fields[0], "x");
    }
}
