//! Values of sealed sum types.

use std::fmt;
use std::slice;

use tagged_types::{Name, SumTypeId, VariantTag};

use crate::constructor::VariantConstructor;
use crate::errors::SumTypeError;
use crate::sum_type::SumType;

/// Common interface of every value produced by a variant constructor.
///
/// Consumers that dispatch over variants (matchers, interpreters) only need
/// this trait: it answers which sum type a value belongs to and which
/// variant built it.
pub trait SumValue {
    fn constructor(&self) -> &VariantConstructor;

    fn sum_type_id(&self) -> SumTypeId {
        self.constructor().sum_type_id()
    }

    fn tag(&self) -> VariantTag {
        self.constructor().tag()
    }

    fn variant_name(&self) -> &Name {
        self.constructor().name()
    }

    /// Whether this value inhabits `sum_type`.
    fn is_a(&self, sum_type: &SumType) -> bool {
        self.sum_type_id() == sum_type.id()
    }
}

/// One value of a sum type: the constructor that built it plus its field
/// values in declared order.
#[derive(Clone)]
pub struct VariantInstance<V> {
    constructor: VariantConstructor,
    values: Vec<V>,
}

impl<V> VariantInstance<V> {
    pub(crate) fn new(constructor: VariantConstructor, values: Vec<V>) -> Self {
        debug_assert_eq!(constructor.arity(), values.len());
        Self {
            constructor,
            values,
        }
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        self.constructor.name()
    }

    /// Whether `constructor` is exactly the constructor that built this value.
    #[must_use]
    pub fn is_instance_of(&self, constructor: &VariantConstructor) -> bool {
        self.constructor.same_as(constructor)
    }

    /// Value of the named field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&V> {
        self.constructor
            .field_index(field)
            .and_then(|index| self.values.get(index))
    }

    /// Field values in declared order. Each call starts a new iteration.
    pub fn values(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    /// `(field name, value)` pairs in declared order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = (&Name, &V)> + '_ {
        self.constructor.fields().iter().zip(&self.values)
    }

    /// Positional unpacking, e.g. `let [x, y] = both.destructure::<2>()?;`.
    pub fn destructure<const N: usize>(&self) -> Result<[&V; N], SumTypeError> {
        let refs: Vec<&V> = self.values.iter().collect();
        <[&V; N]>::try_from(refs).map_err(|refs| SumTypeError::Arity {
            variant: self.constructor.name().clone(),
            expected: N,
            actual: refs.len(),
        })
    }

    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V> SumValue for VariantInstance<V> {
    fn constructor(&self) -> &VariantConstructor {
        &self.constructor
    }
}

impl<'a, V> IntoIterator for &'a VariantInstance<V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

/// Renders like a struct literal of the variant: `Both { x: 1, y: 2 }`.
impl<V: fmt::Debug> fmt::Debug for VariantInstance<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.constructor.name().as_str());
        for (field, value) in self.fields() {
            out.field(field.as_str(), value);
        }
        out.finish()
    }
}
