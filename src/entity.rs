use std::collections::HashMap;

use crate::errors::*;
use crate::models::{EntityFields, FieldValue};
use crate::utils::{EntityName, FieldName};

const RAW_FIELD: &str = "raw";

/// Entity extracted from a sentence, such as a location or a pronoun.
///
/// The available fields depend on the entity category, the only field which
/// is always present being `raw`: the part of the input text which matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    name: EntityName,
    raw: String,
    fields: HashMap<FieldName, FieldValue>,
}

impl Entity {
    pub fn new<S: Into<EntityName>>(name: S, fields: EntityFields) -> Result<Self> {
        let name = name.into();
        let raw = match fields.get(RAW_FIELD) {
            Some(FieldValue::String(raw)) => raw.clone(),
            Some(other) => {
                return Err(RecastError::MalformedPayload(format!(
                    "field '{}' of entity '{}' must be a string but found {}",
                    RAW_FIELD,
                    name,
                    other.type_name()
                ))
                .into())
            }
            None => {
                return Err(RecastError::MalformedPayload(format!(
                    "entity '{}' has no '{}' field",
                    name, RAW_FIELD
                ))
                .into())
            }
        };
        Ok(Self { name, raw, fields })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text of the input which was recognized as this entity
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the value of the field `name`, or `None` if the entity does not carry it
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &HashMap<FieldName, FieldValue> {
        &self.fields
    }
}
