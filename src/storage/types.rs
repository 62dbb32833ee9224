use serde::Serialize;
use std::str::FromStr;

use crate::catalog::Item;
use crate::config::{FALSE_LITERAL, ITEM_SEPARATOR, TRUE_LITERAL};
use crate::error::{PrefError, Result};

// =============================================================================
// Keys
// =============================================================================

/// One of the five stored preference fields.
///
/// The position of a key is the line index it occupies in the backing file
/// and its row in the record model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefKey {
    Option1,
    Option2,
    Line1,
    Line2,
    EnabledItems,
}

impl PrefKey {
    /// All keys, ordered by position.
    pub const ALL: [PrefKey; 5] = [
        PrefKey::Option1,
        PrefKey::Option2,
        PrefKey::Line1,
        PrefKey::Line2,
        PrefKey::EnabledItems,
    ];

    /// Line index / record row of this key.
    pub fn position(self) -> usize {
        match self {
            PrefKey::Option1 => 0,
            PrefKey::Option2 => 1,
            PrefKey::Line1 => 2,
            PrefKey::Line2 => 3,
            PrefKey::EnabledItems => 4,
        }
    }

    /// Key stored at `position`, if any.
    pub fn from_position(position: usize) -> Option<PrefKey> {
        PrefKey::ALL.get(position).copied()
    }

    /// Get key name for display.
    pub fn name(self) -> &'static str {
        match self {
            PrefKey::Option1 => "option1",
            PrefKey::Option2 => "option2",
            PrefKey::Line1 => "line1",
            PrefKey::Line2 => "line2",
            PrefKey::EnabledItems => "enabled_items",
        }
    }

    /// The only value kind this key accepts.
    pub fn kind(self) -> ValueKind {
        match self {
            PrefKey::Option1 | PrefKey::Option2 => ValueKind::Bool,
            PrefKey::Line1 | PrefKey::Line2 => ValueKind::Text,
            PrefKey::EnabledItems => ValueKind::Items,
        }
    }
}

impl std::fmt::Display for PrefKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PrefKey {
    type Err = PrefError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "option1" => Ok(PrefKey::Option1),
            "option2" => Ok(PrefKey::Option2),
            "line1" => Ok(PrefKey::Line1),
            "line2" => Ok(PrefKey::Line2),
            "enabled" | "enabled_items" | "enabled-items" => Ok(PrefKey::EnabledItems),
            _ => Err(PrefError::UnknownKey(s.to_string())),
        }
    }
}

// =============================================================================
// Values
// =============================================================================

/// Shape of a preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Text,
    Items,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Bool => write!(f, "boolean"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::Items => write!(f, "item list"),
        }
    }
}

/// A decoded preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Text(String),
    Items(Vec<Item>),
}

impl PrefValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            PrefValue::Bool(_) => ValueKind::Bool,
            PrefValue::Text(_) => ValueKind::Text,
            PrefValue::Items(_) => ValueKind::Items,
        }
    }

    /// Serialize to the single line stored in the backing file (without newline).
    pub fn encode(&self) -> String {
        match self {
            PrefValue::Bool(true) => TRUE_LITERAL.to_string(),
            PrefValue::Bool(false) => FALSE_LITERAL.to_string(),
            PrefValue::Text(text) => text.clone(),
            PrefValue::Items(items) => items
                .iter()
                .map(Item::name)
                .collect::<Vec<_>>()
                .join(ITEM_SEPARATOR),
        }
    }

    /// Decode a stored line for `key`.
    ///
    /// Booleans are true only for the exact literal `True`. An empty
    /// enabled-items line is an empty list.
    pub fn decode(key: PrefKey, line: &str) -> Result<PrefValue> {
        let line = line.trim();
        match key.kind() {
            ValueKind::Bool => Ok(PrefValue::Bool(line == TRUE_LITERAL)),
            ValueKind::Text => Ok(PrefValue::Text(line.to_string())),
            ValueKind::Items => {
                if line.is_empty() {
                    return Ok(PrefValue::Items(Vec::new()));
                }
                line.split(ITEM_SEPARATOR)
                    .map(str::parse)
                    .collect::<Result<Vec<Item>>>()
                    .map(PrefValue::Items)
            }
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PrefValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[Item]> {
        match self {
            PrefValue::Items(items) => Some(items),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrefValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefValue::Bool(value) => write!(f, "{}", value),
            PrefValue::Text(text) => write!(f, "{}", text),
            PrefValue::Items(items) => {
                let names: Vec<_> = items.iter().map(Item::name).collect();
                write!(f, "[{}]", names.join(", "))
            }
        }
    }
}

// =============================================================================
// Record
// =============================================================================

/// All five preference fields, decoded from one read of the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceRecord {
    pub option1: bool,
    pub option2: bool,
    pub line1: String,
    pub line2: String,
    pub enabled_items: Vec<Item>,
}

impl PreferenceRecord {
    /// Value of one field.
    pub fn value(&self, key: PrefKey) -> PrefValue {
        match key {
            PrefKey::Option1 => PrefValue::Bool(self.option1),
            PrefKey::Option2 => PrefValue::Bool(self.option2),
            PrefKey::Line1 => PrefValue::Text(self.line1.clone()),
            PrefKey::Line2 => PrefValue::Text(self.line2.clone()),
            PrefKey::EnabledItems => PrefValue::Items(self.enabled_items.clone()),
        }
    }

    /// The lines of the backing file, ordered by key position.
    pub fn to_lines(&self) -> Vec<String> {
        PrefKey::ALL
            .iter()
            .map(|&key| self.value(key).encode())
            .collect()
    }

    /// Decode a record from file lines. `lines` must hold at least one line per key.
    pub(crate) fn from_lines(lines: &[String]) -> Result<Self> {
        let decode = |key: PrefKey| PrefValue::decode(key, &lines[key.position()]);

        // decode() always yields the kind of the key it was given
        Ok(PreferenceRecord {
            option1: decode(PrefKey::Option1)?.as_bool().unwrap_or_default(),
            option2: decode(PrefKey::Option2)?.as_bool().unwrap_or_default(),
            line1: decode(PrefKey::Line1)?
                .as_text()
                .map(str::to_string)
                .unwrap_or_default(),
            line2: decode(PrefKey::Line2)?
                .as_text()
                .map(str::to_string)
                .unwrap_or_default(),
            enabled_items: decode(PrefKey::EnabledItems)?
                .as_items()
                .map(<[Item]>::to_vec)
                .unwrap_or_default(),
        })
    }
}
