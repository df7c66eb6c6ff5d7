use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// File the converter looks for inside the workspace directory.
pub const SOURCE_FILE_NAME: &str = "env.json";

/// One named variable with its per-environment values.
///
/// Every key other than `Name` is an environment identifier; the mapped value
/// is what the variable expands to in that environment. An absent key means
/// the variable does not appear in that environment's file at all, while an
/// explicit `null` is kept and written out as the literal text `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct VariableEntry {
    /// Display name, normalized into the emitted variable key.
    #[serde(rename = "Name")]
    pub name: String,

    /// Environment identifier to value, in document order.
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl VariableEntry {
    /// Value of this variable for `environment`, if the entry defines one.
    /// `Some(Value::Null)` and `None` are distinct on purpose.
    pub fn value(&self, environment: &str) -> Option<&Value> {
        self.values.get(environment)
    }
}

/// A named group of variables, rendered as one commented block.
#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub entries: Vec<VariableEntry>,
}

/// The parsed source file: sections in document order.
#[derive(Debug, Clone, Default)]
pub struct ConfigDocument {
    pub sections: Vec<Section>,
}

impl ConfigDocument {
    /// Read and parse the source file at `path`.
    ///
    /// A missing file is [`Error::SourceNotFound`]; anything unreadable or
    /// malformed, including an entry without `Name`, is [`Error::Parse`].
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&text).map_err(|message| Error::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub(crate) fn parse(text: &str) -> std::result::Result<Self, String> {
        let root: Map<String, Value> = serde_json::from_str(text).map_err(|e| e.to_string())?;

        let mut sections = Vec::with_capacity(root.len());
        for (name, value) in root {
            let entries: Vec<VariableEntry> = serde_json::from_value(value)
                .map_err(|e| format!("section \"{name}\": {e}"))?;
            sections.push(Section { name, entries });
        }

        Ok(Self { sections })
    }

    /// Every distinct environment identifier in the document, in first-seen
    /// order over sections, entries, then keys. Repeat sightings are no-ops,
    /// so this order also fixes which output file is created first.
    pub fn environment_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();

        for section in &self.sections {
            for entry in &section.entries {
                for key in entry.values.keys() {
                    if !names.iter().any(|known| known == key) {
                        names.push(key.clone());
                    }
                }
            }
        }

        names
    }
}
