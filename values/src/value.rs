//! Immutable, value-equal objects produced by a factory.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::builder::Builder;
use crate::factory::FactoryCore;
use crate::field::FieldName;

/// An immutable mapping from field name to value, covering exactly the
/// schema's fields.
///
/// There is no mutating API; a "changed" value is obtained only by
/// constructing a new object, directly or via [`to_builder`].
/// Equality is structural over the field contents - which factory
/// produced the object, and whether it carries a transform, play no part.
///
/// [`to_builder`]: ValueObject::to_builder
#[derive(Clone)]
pub struct ValueObject {
    core: Arc<FactoryCore>,
    fields: BTreeMap<FieldName, Value>,
}

impl ValueObject {
    pub(crate) fn from_parts(core: Arc<FactoryCore>, fields: BTreeMap<FieldName, Value>) -> Self {
        Self { core, fields }
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> Option<&Value> {
        self.fields.get(&field)
    }

    #[must_use]
    pub fn fields(&self) -> &BTreeMap<FieldName, Value> {
        &self.fields
    }

    /// Builder seeded with this object's current field values.
    #[must_use]
    pub fn to_builder(&self) -> Builder {
        Builder::seeded(Arc::clone(&self.core), self.fields.clone())
    }

    /// Serialized form: the plain field mapping as a JSON object, or the
    /// factory transform's output when one was supplied.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self.core.transform {
            Some(transform) => transform(&self.fields),
            None => plain_json(&self.fields),
        }
    }
}

/// The field mapping as a plain JSON object, untouched by any transform.
pub(crate) fn plain_json(fields: &BTreeMap<FieldName, Value>) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(field, value)| (field.as_str().to_owned(), value.clone()))
            .collect(),
    )
}

impl PartialEq for ValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for ValueObject {}

impl fmt::Debug for ValueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.fields).finish()
    }
}

impl fmt::Display for ValueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = plain_json(&self.fields);
        let rendered = serde_json::to_string_pretty(&plain).map_err(|_err| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl Serialize for ValueObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::Factory;
    use crate::schema::{FieldDefault, Schema};
    use serde_json::json;

    const MAGNITUDE: FieldName = FieldName::new("magnitude");
    const UNIT: FieldName = FieldName::new("unit");

    fn schema() -> Schema {
        Schema::new([
            (MAGNITUDE, FieldDefault::Required),
            (UNIT, FieldDefault::Value(json!("cm"))),
        ])
        .unwrap()
    }

    #[test]
    fn default_serialization_is_the_plain_mapping() {
        let m = Factory::new(schema())
            .create([(MAGNITUDE, json!(100))])
            .unwrap();
        assert_eq!(m.to_json(), json!({ "magnitude": 100, "unit": "cm" }));
    }

    #[test]
    fn transform_reshapes_serialized_output() {
        let factory = Factory::with_transform(schema(), |fields| {
            json!({
                "label": format!("{} {}", fields[&MAGNITUDE], fields[&UNIT]),
            })
        });
        let m = factory
            .create([(MAGNITUDE, json!(100)), (UNIT, json!("cm"))])
            .unwrap();
        assert_eq!(m.to_json(), json!({ "label": "100 \"cm\"" }));
    }

    #[test]
    fn serde_serialize_matches_to_json() {
        let m = Factory::new(schema())
            .create([(MAGNITUDE, json!(7))])
            .unwrap();
        let via_serde = serde_json::to_value(&m).unwrap();
        assert_eq!(via_serde, m.to_json());
    }

    #[test]
    fn equality_ignores_the_owning_factory() {
        let plain = Factory::new(schema());
        let transformed = Factory::with_transform(schema(), plain_json);
        let a = plain.create([(MAGNITUDE, json!(1))]).unwrap();
        let b = transformed.create([(MAGNITUDE, json!(1))]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_renders_the_plain_mapping() {
        let m = Factory::new(schema())
            .create([(MAGNITUDE, json!(100))])
            .unwrap();
        let rendered = m.to_string();
        assert!(rendered.contains("\"magnitude\": 100"));
        assert!(rendered.contains("\"unit\": \"cm\""));
    }

    #[test]
    fn transform_does_not_affect_display() {
        let factory = Factory::with_transform(schema(), |_fields| json!(null));
        let m = factory.create([(MAGNITUDE, json!(100))]).unwrap();
        assert!(m.to_string().contains("\"magnitude\": 100"));
        assert_eq!(m.to_json(), json!(null));
    }
}
