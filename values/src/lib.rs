//! Immutable value objects with defaults and fluent builders.
//!
//! This crate contains pure domain code with no IO, no async, and minimal
//! dependencies. A [`Schema`] classifies every field of a target shape as
//! required or optional; a [`Factory`] closed over that schema constructs
//! immutable, value-equal [`ValueObject`]s; a [`Builder`] produces modified
//! copies one field at a time. The [`value_object!`] macro generates the
//! same shape as a concrete struct, where a missing required field or a
//! write to a constructed value is a compile error rather than a runtime
//! one.

mod builder;
mod factory;
mod field;
mod macros;
mod schema;
mod value;

pub use builder::Builder;
pub use factory::{ConstructError, Factory, Transform};
pub use field::FieldName;
pub use schema::{FieldDefault, Schema, SchemaError};
pub use value::ValueObject;
