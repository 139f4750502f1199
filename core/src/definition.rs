//! Declarative form of a sum type, suitable for configuration files.

use serde::{Deserialize, Serialize};

use crate::errors::SumTypeError;
use crate::sum_type::SumType;

/// A sum type described as data rather than through builder calls.
///
/// `name` is optional so that a definition missing its name is reported as
/// [`SumTypeError::NameRequired`] rather than as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumTypeDefinition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl SumTypeDefinition {
    /// Create the sum type and seal it with the listed variants, in order.
    pub fn build(&self) -> Result<SumType, SumTypeError> {
        let name = self.name.as_deref().ok_or(SumTypeError::NameRequired)?;
        let sum_type = SumType::new(name)?;
        sum_type.define(
            self.variants
                .iter()
                .map(|variant| (variant.name.as_str(), variant.fields.iter().map(String::as_str))),
        )?;
        Ok(sum_type)
    }
}
