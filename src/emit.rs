use regex::Regex;
use serde_json::Value;

use crate::document::ConfigDocument;

/// Output file name for an environment, always `.env.<environment>`.
pub fn env_file_name(environment: &str) -> String {
    format!(".env.{environment}")
}

/// Renders the flat `.env` text for one environment at a time.
#[derive(Debug, Clone)]
pub struct Emitter {
    whitespace: Regex,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("whitespace pattern compiles"),
        }
    }

    /// Render the complete file body for `environment`.
    ///
    /// Sections come out in document order as `# name` blocks; the comment
    /// line is kept even when no entry in the section matches. A variable
    /// line appears only when the entry defines a value for this environment,
    /// with explicit `null` counting as defined. The assembled text is
    /// trimmed, so the file neither starts nor ends with separator blanks.
    pub fn render(&self, doc: &ConfigDocument, environment: &str) -> String {
        let mut out = String::new();

        for section in &doc.sections {
            self.comment(&mut out, &section.name);

            for entry in &section.entries {
                if let Some(value) = entry.value(environment) {
                    self.var(&mut out, &entry.name, value);
                }
            }

            self.blank(&mut out);
        }

        out.trim().to_string()
    }

    fn comment(&self, out: &mut String, text: &str) {
        out.push_str("# ");
        out.push_str(text);
        out.push('\n');
    }

    fn blank(&self, out: &mut String) {
        out.push('\n');
    }

    fn var(&self, out: &mut String, name: &str, value: &Value) {
        out.push_str(&self.normalize_name(name));
        out.push('=');
        out.push_str(&value_text(value));
        out.push('\n');
    }

    /// Collapse every whitespace run in `name` to one underscore, then
    /// uppercase. Only whitespace is touched; hyphens and the rest of the
    /// name pass through, and edge runs become edge underscores.
    pub fn normalize_name(&self, name: &str) -> String {
        self.whitespace.replace_all(name, "_").to_uppercase()
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

// -------------------- value formatting --------------------

/// Literal text for a value: strings verbatim, everything else in JSON form
/// (`true`, `42`, `null`). No quoting and no escaping, so a value containing
/// `#`, `=` or a newline lands in the file as-is.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
