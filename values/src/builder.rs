//! Fluent, immutable construction of modified value objects.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::factory::{ConstructError, FactoryCore};
use crate::field::FieldName;
use crate::value::ValueObject;

/// An immutable snapshot of in-progress field values.
///
/// Every [`set`] call returns a *new* builder; the receiver is only
/// borrowed, so earlier builders in a chain remain valid, independently
/// usable snapshots. Nothing is shared mutably between instances.
///
/// [`set`]: Builder::set
#[derive(Debug, Clone)]
pub struct Builder {
    core: Arc<FactoryCore>,
    fields: BTreeMap<FieldName, Value>,
}

impl Builder {
    pub(crate) fn seeded(core: Arc<FactoryCore>, fields: BTreeMap<FieldName, Value>) -> Self {
        Self { core, fields }
    }

    /// New builder with `field` set to `value` and all other fields
    /// carried over unchanged.
    ///
    /// Fails when `field` is not part of the schema.
    pub fn set(
        &self,
        field: FieldName,
        value: impl Into<Value>,
    ) -> Result<Builder, ConstructError> {
        if !self.core.schema.contains(field) {
            return Err(ConstructError::SchemaMismatch { field });
        }
        let mut fields = self.fields.clone();
        fields.insert(field, value.into());
        Ok(Self {
            core: Arc::clone(&self.core),
            fields,
        })
    }

    /// The value this builder currently holds for `field`, if any.
    ///
    /// A required field seeded from the defaults map alone is absent until
    /// it is [`set`](Builder::set).
    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&Value> {
        self.fields.get(&field)
    }

    /// Materialize a new immutable value object from the current fields.
    ///
    /// Fails with [`ConstructError::MissingRequiredField`] when a required
    /// field was never set; a builder seeded from a value object always
    /// carries a full field set and builds successfully.
    pub fn build(&self) -> Result<ValueObject, ConstructError> {
        FactoryCore::materialize(&self.core, self.fields.clone())
    }
}
