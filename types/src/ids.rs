use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SUM_TYPE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one sum type.
///
/// Two sum types declared with the same name are still distinct types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SumTypeId(u64);

impl SumTypeId {
    /// Allocate a fresh id. Never returns the same value twice within a process.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SUM_TYPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SumTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a variant within its sum type's declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantTag(usize);

impl VariantTag {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
