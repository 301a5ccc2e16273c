use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::types::TeamId;

pub const DEFAULT_SCRIPT_KIND: &str = "SCRIPT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftOption {
    pub key: String,
    pub value: String,
}

/// A script being composed by the operator. Every edit returns a new draft
/// and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptDraft {
    pub name: String,
    pub cmd: String,
    pub kind: String,
    pub team: Option<TeamId>,
    options: Vec<DraftOption>,
}

impl Default for ScriptDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            cmd: String::new(),
            kind: DEFAULT_SCRIPT_KIND.to_string(),
            team: None,
            options: Vec::new(),
        }
    }
}

impl ScriptDraft {
    pub fn new(name: impl Into<String>, cmd: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cmd: cmd.into(),
            ..Self::default()
        }
    }

    pub fn with_team(&self, team: impl Into<TeamId>) -> Self {
        Self {
            team: Some(team.into()),
            ..self.clone()
        }
    }

    pub fn with_kind(&self, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..self.clone()
        }
    }

    pub fn options(&self) -> &[DraftOption] {
        &self.options
    }

    /// Appends an empty key/value row.
    pub fn add_option(&self) -> Self {
        self.with_option("", "")
    }

    pub fn with_option(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut options = self.options.clone();
        options.push(DraftOption {
            key: key.into(),
            value: value.into(),
        });
        Self {
            options,
            ..self.clone()
        }
    }

    pub fn set_option(
        &self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, CoreError> {
        self.check_index(index)?;
        let mut options = self.options.clone();
        options[index] = DraftOption {
            key: key.into(),
            value: value.into(),
        };
        Ok(Self {
            options,
            ..self.clone()
        })
    }

    pub fn remove_option(&self, index: usize) -> Result<Self, CoreError> {
        self.check_index(index)?;
        let options = self
            .options
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, opt)| opt.clone())
            .collect();
        Ok(Self {
            options,
            ..self.clone()
        })
    }

    /// Folds the option rows into a map. Rows with a blank key are skipped and
    /// a repeated key keeps its last value.
    pub fn default_options(&self) -> BTreeMap<String, String> {
        self.options
            .iter()
            .filter(|opt| !opt.key.trim().is_empty())
            .map(|opt| (opt.key.clone(), opt.value.clone()))
            .collect()
    }

    /// The service expects a numeric team id.
    pub fn team_id(&self) -> Result<i64, CoreError> {
        let team = self.team.as_ref().ok_or(CoreError::MissingField("team"))?;
        team.0
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::InvalidTeamId(team.0.clone()))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name"));
        }
        if self.cmd.trim().is_empty() {
            return Err(CoreError::MissingField("cmd"));
        }
        self.team_id().map(|_| ())
    }

    fn check_index(&self, index: usize) -> Result<(), CoreError> {
        if index >= self.options.len() {
            return Err(CoreError::OptionIndex {
                index,
                len: self.options.len(),
            });
        }
        Ok(())
    }
}
