//! Naming and identity primitives for tagged sum types.
//!
//! This crate contains pure value types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the workspace.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod ids;
mod name;

pub use ids::{SumTypeId, VariantTag};
pub use name::{EmptyNameError, Name};
