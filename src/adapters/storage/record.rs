//! Persisted layout of the choice mapping.
//!
//! On disk the mapping is `{ "<id>": { title, options, picked, history } }`.
//! The identifier lives only in the key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::StorageFormat;
use crate::domain::choice::Choice;
use crate::domain::foundation::ChoiceId;
use crate::ports::{ChoiceMap, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChoiceRecord {
    title: String,
    options: Vec<String>,
    #[serde(default)]
    picked: Option<String>,
    #[serde(default)]
    history: Vec<String>,
}

type RecordMap = BTreeMap<String, ChoiceRecord>;

impl From<&Choice> for ChoiceRecord {
    fn from(choice: &Choice) -> Self {
        Self {
            title: choice.title().to_string(),
            options: choice.options().as_slice().to_vec(),
            picked: choice.picked().map(str::to_string),
            history: choice.history().to_vec(),
        }
    }
}

fn encode(choices: &ChoiceMap) -> RecordMap {
    choices
        .iter()
        .map(|(id, choice)| (id.to_string(), ChoiceRecord::from(choice)))
        .collect()
}

fn decode(records: RecordMap) -> Result<ChoiceMap, StorageError> {
    let mut choices = ChoiceMap::new();
    for (key, record) in records {
        let id: ChoiceId = key
            .parse()
            .map_err(|e| StorageError::Corrupt(format!("invalid choice id '{}': {}", key, e)))?;

        let choice = Choice::restore(id, record.title, record.options, record.picked, record.history)
            .map_err(|e| StorageError::Corrupt(format!("choice {}: {}", id, e)))?;

        choices.insert(id, choice);
    }
    Ok(choices)
}

/// Serializes the full mapping in the given format.
pub(super) fn to_document(choices: &ChoiceMap, format: StorageFormat) -> Result<String, StorageError> {
    let records = encode(choices);
    match format {
        StorageFormat::Json => serde_json::to_string_pretty(&records)
            .map_err(|e| StorageError::Serialization(e.to_string())),
        StorageFormat::Yaml => {
            serde_yaml::to_string(&records).map_err(|e| StorageError::Serialization(e.to_string()))
        }
    }
}

/// Parses and validates a stored document.
pub(super) fn from_document(document: &str, format: StorageFormat) -> Result<ChoiceMap, StorageError> {
    let records: RecordMap = match format {
        StorageFormat::Json => {
            serde_json::from_str(document).map_err(|e| StorageError::Corrupt(e.to_string()))?
        }
        StorageFormat::Yaml => {
            serde_yaml::from_str(document).map_err(|e| StorageError::Corrupt(e.to_string()))?
        }
    };
    decode(records)
}
