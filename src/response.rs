use std::collections::HashMap;
use std::str::FromStr;

use log::debug;

use crate::entity::Entity;
use crate::errors::*;
use crate::models::{ResponseModel, ResultsModel};
use crate::sentence::Sentence;
use crate::utils::IntentName;

/// Analysis of a text or voice input, as returned by the NLU API.
///
/// A `Response` is built in one pass from the JSON body of the API and is
/// never modified afterwards. Entity lookups go through every sentence of
/// the input, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: i32,
    source: String,
    version: String,
    timestamp: String,
    language: String,
    intents: Vec<IntentName>,
    sentences: Vec<Sentence>,
}

impl Response {
    /// Parses the JSON body returned by the API.
    ///
    /// Parsing is all-or-nothing: any deviation from the expected shape
    /// results in a `RecastError::MalformedPayload`.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let model: ResponseModel =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
                RecastError::MalformedPayload(format!("{}: {}", e.path(), e.inner()))
            })?;
        deserializer
            .end()
            .map_err(|e| RecastError::MalformedPayload(e.to_string()))?;
        Self::from_model(model.results)
    }

    fn from_model(results: ResultsModel) -> Result<Self> {
        if results.sentences.is_empty() {
            return Err(RecastError::MalformedPayload(
                "field 'sentences' must contain at least one sentence".to_string(),
            )
            .into());
        }
        let sentences = results
            .sentences
            .into_iter()
            .map(Sentence::from_model)
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "Parsed response with {} intent(s) and {} sentence(s)",
            results.intents.len(),
            sentences.len()
        );
        Ok(Self {
            status: results.status,
            source: results.source,
            version: results.version,
            timestamp: results.timestamp,
            language: results.language,
            intents: results.intents,
            sentences,
        })
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    /// Text which was analyzed
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// ISO 8601 timestamp of the request, as sent by the API
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Matched intents, sorted by decreasing confidence
    pub fn intents(&self) -> &[IntentName] {
        &self.intents
    }

    /// Best matching intent, or `RecastError::NoIntentFound` when none matched
    pub fn intent(&self) -> Result<&str> {
        self.intents
            .first()
            .map(|intent| intent.as_str())
            .ok_or_else(|| RecastError::NoIntentFound.into())
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// First sentence of the input
    pub fn sentence(&self) -> &Sentence {
        // a response is never built without sentences
        &self.sentences[0]
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.sentences
            .iter()
            .find_map(|sentence| sentence.entity(name))
    }

    pub fn entities(&self, name: &str) -> Vec<&Entity> {
        self.sentences
            .iter()
            .flat_map(|sentence| sentence.entities(name))
            .collect()
    }

    /// Entities of all the sentences grouped by category, see `Sentence::all_entities`.
    ///
    /// Entities of a category found in several sentences are gathered in a
    /// single list, following the order of the sentences.
    pub fn all_entities(&self, names: &[&str]) -> HashMap<&str, Vec<&Entity>> {
        let mut all_entities: HashMap<&str, Vec<&Entity>> = HashMap::new();
        for sentence in &self.sentences {
            for (name, entities) in sentence.all_entities(names) {
                all_entities
                    .entry(name)
                    .or_insert_with(Vec::new)
                    .extend(entities);
            }
        }
        all_entities
    }
}

impl FromStr for Response {
    type Err = failure::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}
