//! Value factory closed over a fixed schema.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::builder::Builder;
use crate::field::FieldName;
use crate::schema::Schema;
use crate::value::ValueObject;

/// Reshapes the serialized output of a value object.
///
/// Applied to the full field set at serialization time; may rename,
/// combine, or drop fields arbitrarily. When no transform is supplied the
/// plain field mapping is emitted instead.
pub type Transform = fn(&BTreeMap<FieldName, Value>) -> Value;

/// Construction failed; no value object is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructError {
    #[error("field `{field}` is not part of the schema")]
    SchemaMismatch { field: FieldName },
    #[error("required field `{field}` was not supplied")]
    MissingRequiredField { field: FieldName },
}

/// Shared, never-mutated state behind a factory and everything it produces.
///
/// Captured once at factory creation; value objects and builders hold an
/// `Arc` to it, mirroring the closure capture in the construction API.
#[derive(Debug)]
pub(crate) struct FactoryCore {
    pub(crate) schema: Schema,
    pub(crate) transform: Option<Transform>,
}

impl FactoryCore {
    /// Merge defaults with supplied fields and validate the result.
    ///
    /// Supplied values win; unsupplied optional fields take their default.
    /// Fails atomically: on error nothing is constructed.
    pub(crate) fn materialize<I>(
        core: &Arc<FactoryCore>,
        fields: I,
    ) -> Result<ValueObject, ConstructError>
    where
        I: IntoIterator<Item = (FieldName, Value)>,
    {
        let mut merged = core.schema.seed();
        for (field, value) in fields {
            if !core.schema.contains(field) {
                return Err(ConstructError::SchemaMismatch { field });
            }
            merged.insert(field, value);
        }
        for field in core.schema.required() {
            if !merged.contains_key(&field) {
                return Err(ConstructError::MissingRequiredField { field });
            }
        }
        Ok(ValueObject::from_parts(Arc::clone(core), merged))
    }
}

/// Constructs immutable value objects for one schema.
///
/// The schema and the optional serialization transform are fixed at
/// creation time. Cloning a factory is cheap and shares the same core.
#[derive(Debug, Clone)]
pub struct Factory {
    core: Arc<FactoryCore>,
}

impl Factory {
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            core: Arc::new(FactoryCore {
                schema,
                transform: None,
            }),
        }
    }

    /// Factory whose value objects serialize through `transform` instead
    /// of emitting the plain field mapping.
    #[must_use]
    pub fn with_transform(schema: Schema, transform: Transform) -> Self {
        Self {
            core: Arc::new(FactoryCore {
                schema,
                transform: Some(transform),
            }),
        }
    }

    /// Construct a value object from the supplied fields.
    ///
    /// Every required field must be present; optional fields may be
    /// omitted and take their default.
    pub fn create<I>(&self, fields: I) -> Result<ValueObject, ConstructError>
    where
        I: IntoIterator<Item = (FieldName, Value)>,
    {
        FactoryCore::materialize(&self.core, fields)
    }

    /// Builder seeded from the defaults alone.
    ///
    /// Required fields start unset and must be `set` before `build`.
    #[must_use]
    pub fn builder(&self) -> Builder {
        Builder::seeded(Arc::clone(&self.core), self.core.schema.seed())
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.core.schema
    }
}
