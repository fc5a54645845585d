use std::collections::HashMap;

use serde::de::Error;
use serde::Deserializer;
use serde_derive::Deserialize;

use super::FieldValue;
use crate::utils::{EntityName, FieldName, IntentName};

pub type EntityFields = HashMap<FieldName, FieldValue>;

#[derive(Debug, Deserialize)]
pub struct ResponseModel {
    pub results: ResultsModel,
}

#[derive(Debug, Deserialize)]
pub struct ResultsModel {
    #[serde(deserialize_with = "integer_valued")]
    pub status: i32,
    pub source: String,
    pub version: String,
    pub timestamp: String,
    pub language: String,
    pub intents: Vec<IntentName>,
    pub sentences: Vec<SentenceModel>,
}

#[derive(Debug, Deserialize)]
pub struct SentenceModel {
    pub source: String,
    #[serde(rename = "type", default, deserialize_with = "nullable_string")]
    pub sentence_type: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub action: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub agent: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub polarity: String,
    #[serde(default)]
    pub entities: HashMap<EntityName, Vec<EntityFields>>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Accepts any JSON number without fractional part which fits in an `i32`
fn integer_valued<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: f64 = serde::Deserialize::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(D::Error::custom(format!(
            "expected an integer-valued number, found {}",
            value
        )));
    }
    Ok(value as i32)
}
