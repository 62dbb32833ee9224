//! Parsing utilities for CLI arguments and shell input.
//!
//! This module turns user-typed text into keys, values and interactive
//! shell commands.

use crate::catalog::Item;
use crate::error::{PrefError, Result};
use crate::storage::{PrefKey, PrefValue, ValueKind};

// =============================================================================
// Value Parsing
// =============================================================================

/// Parse a user-typed boolean.
///
/// Accepts `true/false`, `yes/no`, `on/off` and `1/0`, case-insensitively.
pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(PrefError::InvalidInput(format!(
            "Invalid boolean '{}'. Use: true or false",
            raw
        ))),
    }
}

/// Parse a comma-separated list of item names. Empty input is an empty list.
///
/// # Example
/// ```
/// use pref_editor::catalog::Item;
/// use pref_editor::utils::parsing::parse_items;
///
/// let items = parse_items("mango, Plum").unwrap();
/// assert_eq!(items, vec![Item::Mango, Item::Plum]);
/// ```
pub fn parse_items(raw: &str) -> Result<Vec<Item>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(str::parse).collect()
}

/// Parse the value for `key` from user input.
///
/// Text values are trimmed, matching how they are read back; line breaks
/// are rejected since each value occupies one line of the backing file.
pub fn parse_value(key: PrefKey, raw: &str) -> Result<PrefValue> {
    match key.kind() {
        ValueKind::Bool => parse_bool(raw).map(PrefValue::Bool),
        ValueKind::Items => parse_items(raw).map(PrefValue::Items),
        ValueKind::Text => {
            if raw.contains(['\n', '\r']) {
                return Err(PrefError::InvalidInput(format!(
                    "'{}' must be a single line",
                    key
                )));
            }
            Ok(PrefValue::Text(raw.trim().to_string()))
        }
    }
}

// =============================================================================
// Shell Commands
// =============================================================================

/// Which list a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSide {
    Enabled,
    Disabled,
}

/// A command of the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Select a row in one list.
    Select(ListSide, usize),
    /// Select the row holding an item, in whichever list has it.
    SelectItem(Item),
    /// Clear both selections.
    Clear,
    Up,
    Down,
    Enable,
    Disable,
    Toggle(PrefKey),
    Set(PrefKey, PrefValue),
    List,
    Show,
    Help,
    Quit,
}

/// Usage text printed by the `help` shell command.
pub const SHELL_HELP: &str = "\
Commands:
  select enabled N | select disabled N   select a row (0-based)
  select ITEM                            select an item in either list
  clear                                  clear both selections
  up | down                              move the selected enabled item
  enable                                 enable the selected disabled item
  disable                                disable the selected enabled item
  toggle option1|option2                 flip a toggle
  set KEY VALUE                          set option1, option2, line1, line2 or enabled
  list                                   show both lists and selections
  show                                   show all preferences
  help                                   show this help
  quit                                   leave the shell";

/// Parse one line of shell input. Blank lines yield `None`.
pub fn parse_shell_command(line: &str) -> Result<Option<ShellCommand>> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => return Ok(None),
        "select" | "sel" => parse_select(rest)?,
        "clear" => ShellCommand::Clear,
        "up" => ShellCommand::Up,
        "down" => ShellCommand::Down,
        "enable" => ShellCommand::Enable,
        "disable" => ShellCommand::Disable,
        "toggle" => ShellCommand::Toggle(rest.parse()?),
        "set" => {
            let (key, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let key: PrefKey = key.parse()?;
            ShellCommand::Set(key, parse_value(key, value.trim())?)
        }
        "list" | "ls" => ShellCommand::List,
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => {
            return Err(PrefError::InvalidInput(format!(
                "Unknown command '{}'. Type 'help' for a list",
                other
            )));
        }
    };
    Ok(Some(command))
}

fn parse_select(rest: &str) -> Result<ShellCommand> {
    let mut parts = rest.split_whitespace();
    let first = parts.next().unwrap_or_default();
    let side = match first.to_lowercase().as_str() {
        "enabled" | "e" => Some(ListSide::Enabled),
        "disabled" | "d" => Some(ListSide::Disabled),
        _ => None,
    };

    match side {
        Some(side) => {
            let row = parts
                .next()
                .ok_or_else(|| PrefError::InvalidInput("Missing row number".into()))?;
            let row: usize = row
                .parse()
                .map_err(|_| PrefError::InvalidInput(format!("Invalid row '{}'", row)))?;
            Ok(ShellCommand::Select(side, row))
        }
        None => Ok(ShellCommand::SelectItem(first.parse()?)),
    }
}

// =============================================================================
// Tests
// =============================================================================
