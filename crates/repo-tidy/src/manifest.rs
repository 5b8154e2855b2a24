//! Rule Manifest Loading
//!
//! The standard is described by a YAML manifest mapping each rule identifier
//! to a list of attribute records:
//!
//! ```yaml
//! README.TITLE:
//!   - type: REQUIREMENT
//! README.BADGES:
//!   - type: RECOMMENDATION
//!   - values:
//!       - library_status: ["![Experimental]...", "![Stable]..."]
//! ```
//!
//! Loading is a pure function of the input: no side effects beyond reading
//! the manifest file itself.

use crate::{Result, Severity, TidyError};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

/// A named group of literal values, used by composite rules that demand
/// exactly one match per group (e.g. one badge per badge category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueGroup {
    pub name: String,
    pub values: Vec<String>,
}

/// Configuration for a single rule, as declared by the manifest.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    /// Rule identifier, `CATEGORY.NAME`
    pub name: String,
    /// Severity class
    pub severity: Severity,
    /// Single literal value, for rules configured by one literal
    pub value: Option<String>,
    /// Ordered list of literal values
    pub values: Vec<String>,
    /// Named groups of literal values, for composite rules
    pub groups: Vec<ValueGroup>,
    /// Target file name override
    pub file_name: Option<String>,
    /// Default group used by fixes that must pick one value
    pub default_group: Option<String>,
}

/// The loaded standard: every known rule and its configuration.
///
/// Entries keep manifest order; lookups are linear, the set is small.
#[derive(Debug, Clone, Default)]
pub struct RuleManifest {
    entries: Vec<ManifestEntry>,
}

impl RuleManifest {
    /// Load the manifest from a file. Unreadable manifests are fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading standard manifest");
        Self::parse(&content)
    }

    /// Load the standard bundled with this crate.
    pub fn bundled() -> Result<Self> {
        Self::parse(include_str!("../standard.yml"))
    }

    /// Parse manifest text into entries.
    pub fn parse(content: &str) -> Result<Self> {
        let doc: Value = serde_yaml::from_str(content)?;
        let Value::Mapping(map) = doc else {
            return Err(TidyError::Manifest(
                "manifest root must be a mapping of rule identifiers".into(),
            ));
        };

        let mut entries = Vec::new();
        for (key, value) in &map {
            let name = key.as_str().ok_or_else(|| {
                TidyError::Manifest("rule identifiers must be strings".into())
            })?;
            entries.push(parse_entry(name, value)?);
        }

        Ok(Self { entries })
    }

    /// Look up a rule's configuration by identifier.
    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All entries, in manifest order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// All rule identifiers, in manifest order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one rule's attribute-record list.
fn parse_entry(name: &str, value: &Value) -> Result<ManifestEntry> {
    let records = value.as_sequence().ok_or_else(|| {
        TidyError::Manifest(format!(
            "rule `{name}`: expected a list of attribute records"
        ))
    })?;

    let mut severity = None;
    let mut entry = ManifestEntry {
        name: name.to_string(),
        severity: Severity::Requirement,
        value: None,
        values: Vec::new(),
        groups: Vec::new(),
        file_name: None,
        default_group: None,
    };

    for record in records {
        let map = record.as_mapping().ok_or_else(|| {
            TidyError::Manifest(format!(
                "rule `{name}`: attribute records must be key/value mappings"
            ))
        })?;

        for (key, attr) in map {
            let key = key.as_str().ok_or_else(|| {
                TidyError::Manifest(format!("rule `{name}`: attribute keys must be strings"))
            })?;

            match key {
                "type" => {
                    let raw = string_attr(name, key, attr)?;
                    severity = Some(raw.parse::<Severity>().map_err(|_| {
                        TidyError::Manifest(format!("rule `{name}`: invalid severity `{raw}`"))
                    })?);
                }
                "value" => entry.value = Some(string_attr(name, key, attr)?),
                "values" => parse_values(name, attr, &mut entry)?,
                "file_name" => entry.file_name = Some(string_attr(name, key, attr)?),
                "default_group" => entry.default_group = Some(string_attr(name, key, attr)?),
                // Recognized but not yet interpreted; reserved for future
                // rule configuration.
                "regex" | "directory_name" | "status_lines" | "licenses" => {}
                other => {
                    return Err(TidyError::Manifest(format!(
                        "rule `{name}`: unrecognized manifest key `{other}`"
                    )));
                }
            }
        }
    }

    entry.severity = severity.ok_or_else(|| {
        TidyError::Manifest(format!("rule `{name}`: missing `type` attribute"))
    })?;

    Ok(entry)
}

/// A `values` attribute is either a flat list of literals or a list of
/// named groups, each holding a list of literals.
fn parse_values(name: &str, attr: &Value, entry: &mut ManifestEntry) -> Result<()> {
    let items = attr.as_sequence().ok_or_else(|| {
        TidyError::Manifest(format!("rule `{name}`: `values` must be a list"))
    })?;

    for item in items {
        match item {
            Value::String(s) => entry.values.push(s.clone()),
            Value::Mapping(group) => {
                for (group_name, group_values) in group {
                    let group_name = group_name.as_str().ok_or_else(|| {
                        TidyError::Manifest(format!(
                            "rule `{name}`: group names in `values` must be strings"
                        ))
                    })?;
                    let values = group_values
                        .as_sequence()
                        .and_then(|seq| {
                            seq.iter()
                                .map(|v| v.as_str().map(String::from))
                                .collect::<Option<Vec<_>>>()
                        })
                        .ok_or_else(|| {
                            TidyError::Manifest(format!(
                                "rule `{name}`: group `{group_name}` must hold a list of strings"
                            ))
                        })?;
                    entry.groups.push(ValueGroup {
                        name: group_name.to_string(),
                        values,
                    });
                }
            }
            other => {
                return Err(TidyError::Manifest(format!(
                    "rule `{name}`: unsupported `values` item: {other:?}"
                )));
            }
        }
    }

    Ok(())
}

fn string_attr(name: &str, key: &str, attr: &Value) -> Result<String> {
    attr.as_str().map(String::from).ok_or_else(|| {
        TidyError::Manifest(format!("rule `{name}`: `{key}` must be a string"))
    })
}
