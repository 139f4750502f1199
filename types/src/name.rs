//! Validated names for sum types, variants, and fields.
//!
//! A [`Name`] is checked once at construction. Holders can assume the content
//! is non-empty and carries no surrounding whitespace.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A declared name: the name of a sum type, one of its variants, or a field.
///
/// # Invariants
///
/// - Content is never empty after `trim()`
/// - Surrounding whitespace is stripped at construction
///
/// # Serde
///
/// Serializes as a plain string. Deserialization applies the same validation
/// as [`Name::new`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("name must not be empty")]
pub struct EmptyNameError;

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyNameError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(EmptyNameError);
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Name {
    type Error = EmptyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = EmptyNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl Deref for Name {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::{EmptyNameError, Name};

    #[test]
    fn rejects_empty() {
        assert_eq!(Name::new(""), Err(EmptyNameError));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert_eq!(Name::new(" \t\n"), Err(EmptyNameError));
    }

    #[test]
    fn strips_surrounding_whitespace() {
        let name = Name::new("  Maybe ").expect("non-empty name");
        assert_eq!(name, "Maybe");
        assert_eq!(name.as_str().len(), 5);
    }

    #[test]
    fn keeps_clean_input_verbatim() {
        let name = Name::try_from("Just").expect("non-empty name");
        assert_eq!(name.into_inner(), "Just");
    }

    #[test]
    fn display_is_the_bare_name() {
        let name = Name::new("These").expect("non-empty name");
        assert_eq!(name.to_string(), "These");
    }

    #[test]
    fn serde_roundtrip_validates() {
        let name: Name = serde_json::from_str("\"Level\"").expect("valid name");
        assert_eq!(name, "Level");
        assert_eq!(serde_json::to_string(&name).expect("serializable"), "\"Level\"");

        let empty = serde_json::from_str::<Name>("\"   \"");
        assert!(empty.is_err());
    }
}
