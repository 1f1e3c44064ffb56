/// Word list descriptors — the data behind list-derived actions.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A named list of literal values plus optional derived-action names.
///
/// `key` names the direct random-selection action. `articlize`, if set, names
/// an action that prefixes the selection with its indefinite article;
/// `pluralize` names one that pluralizes an independent selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSpec {
    pub key: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub articlize: Option<String>,
    #[serde(default)]
    pub pluralize: Option<String>,
}

impl ListSpec {
    pub fn new(key: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> ListSpec {
        ListSpec {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
            articlize: None,
            pluralize: None,
        }
    }

    /// Name the article-prefixed derived action.
    pub fn articlize(mut self, name: impl Into<String>) -> ListSpec {
        self.articlize = Some(name.into());
        self
    }

    /// Name the pluralized derived action.
    pub fn pluralize(mut self, name: impl Into<String>) -> ListSpec {
        self.pluralize = Some(name.into());
        self
    }
}

/// Parse a RON document containing a sequence of list specs.
pub fn parse_ron(input: &str) -> Result<Vec<ListSpec>, ListError> {
    Ok(ron::from_str(input)?)
}

/// Load list specs from a RON file.
pub fn load_from_ron(path: &Path) -> Result<Vec<ListSpec>, ListError> {
    let contents = std::fs::read_to_string(path)?;
    parse_ron(&contents)
}
