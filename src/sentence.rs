use std::collections::HashMap;

use crate::entity::Entity;
use crate::errors::*;
use crate::models::SentenceModel;
use crate::utils::EntityName;

#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    source: String,
    sentence_type: String,
    action: String,
    agent: String,
    polarity: String,
    entities: HashMap<EntityName, Vec<Entity>>,
}

impl Sentence {
    pub(crate) fn from_model(model: SentenceModel) -> Result<Self> {
        let mut entities = HashMap::with_capacity(model.entities.len());
        for (name, matches) in model.entities {
            if matches.is_empty() {
                continue;
            }
            let category = matches
                .into_iter()
                .map(|fields| Entity::new(name.clone(), fields))
                .collect::<Result<Vec<_>>>()?;
            entities.insert(name, category);
        }
        Ok(Self {
            source: model.source,
            sentence_type: model.sentence_type,
            action: model.action,
            agent: model.agent,
            polarity: model.polarity,
            entities,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Kind of sentence, e.g. "assert" or "question"
    pub fn sentence_type(&self) -> &str {
        &self.sentence_type
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn polarity(&self) -> &str {
        &self.polarity
    }

    /// First entity of the category `name`, in order of appearance
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities(name).first()
    }

    /// All the entities of the category `name`, in order of appearance
    pub fn entities(&self, name: &str) -> &[Entity] {
        self.entities
            .get(name)
            .map(|entities| entities.as_slice())
            .unwrap_or(&[])
    }

    /// Entities grouped by category.
    ///
    /// When `names` is empty, all the categories found in the sentence are
    /// returned. Otherwise only the requested categories are kept, and those
    /// without any match are left out of the map.
    pub fn all_entities(&self, names: &[&str]) -> HashMap<&str, Vec<&Entity>> {
        self.entities
            .iter()
            .filter(|(name, _)| names.is_empty() || names.contains(&name.as_str()))
            .map(|(name, entities)| (name.as_str(), entities.iter().collect()))
            .collect()
    }
}
