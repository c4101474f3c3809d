//! Defaults map and required/optional field classification.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::field::FieldName;

/// Default entry for a single field: either a concrete value or the
/// explicit "required, no default" marker.
///
/// `Required` is its own variant rather than a JSON `null`. A `null`
/// default is a legal, concrete default value; "required" means the caller
/// must supply the field at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDefault {
    Required,
    Value(Value),
}

impl FieldDefault {
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, FieldDefault::Required)
    }

    /// The concrete default, or `None` for a required field.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match self {
            FieldDefault::Value(value) => Some(value),
            FieldDefault::Required => None,
        }
    }
}

impl From<Value> for FieldDefault {
    fn from(value: Value) -> Self {
        FieldDefault::Value(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field `{field}` appears more than once in the defaults")]
    DuplicateField { field: FieldName },
}

/// Defaults map covering exactly the fields of the target shape.
///
/// The schema's key set *is* the field set: there is no separate field
/// list to drift out of sync with. Each field is classified once, at
/// construction time: optional when its entry holds a concrete default,
/// required when it holds [`FieldDefault::Required`]. The classification
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    defaults: BTreeMap<FieldName, FieldDefault>,
}

impl Schema {
    /// Construct from `(field, default)` entries.
    ///
    /// Fails if a field name appears more than once; the entry list must
    /// describe each field exactly once.
    pub fn new<I>(defaults: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (FieldName, FieldDefault)>,
    {
        let mut map = BTreeMap::new();
        for (field, default) in defaults {
            if map.insert(field, default).is_some() {
                return Err(SchemaError::DuplicateField { field });
            }
        }
        Ok(Self { defaults: map })
    }

    #[must_use]
    pub fn contains(&self, field: FieldName) -> bool {
        self.defaults.contains_key(&field)
    }

    #[must_use]
    pub fn default_of(&self, field: FieldName) -> Option<&FieldDefault> {
        self.defaults.get(&field)
    }

    /// All fields, in name order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.defaults.keys().copied()
    }

    /// Fields with no default; these must be supplied at construction.
    pub fn required(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.defaults
            .iter()
            .filter(|(_, default)| default.is_required())
            .map(|(field, _)| *field)
    }

    /// Fields with a concrete default; these may be omitted at construction.
    pub fn optional(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.defaults
            .iter()
            .filter(|(_, default)| !default.is_required())
            .map(|(field, _)| *field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    /// Starting field set for a construction: every optional field mapped
    /// to its default, required fields absent.
    pub(crate) fn seed(&self) -> BTreeMap<FieldName, Value> {
        self.defaults
            .iter()
            .filter_map(|(field, default)| Some((*field, default.value()?.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MAGNITUDE: FieldName = FieldName::new("magnitude");
    const UNIT: FieldName = FieldName::new("unit");

    fn measurement_schema() -> Schema {
        Schema::new([
            (MAGNITUDE, FieldDefault::Required),
            (UNIT, FieldDefault::Value(json!("cm"))),
        ])
        .unwrap()
    }

    #[test]
    fn classification_is_disjoint_and_covers_all_fields() {
        let schema = measurement_schema();
        let required: Vec<_> = schema.required().collect();
        let optional: Vec<_> = schema.optional().collect();
        assert_eq!(required, [MAGNITUDE]);
        assert_eq!(optional, [UNIT]);
        assert_eq!(required.len() + optional.len(), schema.len());
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let result = Schema::new([
            (MAGNITUDE, FieldDefault::Required),
            (MAGNITUDE, FieldDefault::Value(json!(0))),
        ]);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::DuplicateField { field: MAGNITUDE }
        );
    }

    #[test]
    fn null_default_is_optional_not_required() {
        let nickname = FieldName::new("nickname");
        let schema = Schema::new([(nickname, FieldDefault::Value(Value::Null))]).unwrap();
        assert_eq!(schema.required().count(), 0);
        assert_eq!(schema.optional().collect::<Vec<_>>(), [nickname]);
        assert_eq!(schema.seed()[&nickname], Value::Null);
    }

    #[test]
    fn seed_prefills_only_optional_fields() {
        let seed = measurement_schema().seed();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[&UNIT], json!("cm"));
        assert!(!seed.contains_key(&MAGNITUDE));
    }

    #[test]
    fn empty_schema_is_allowed() {
        let schema = Schema::new([]).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.required().count(), 0);
    }
}
