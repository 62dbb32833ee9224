//! Gesture controller for the preference editor.
//!
//! Tracks at most one selected row in each list and turns user gestures
//! (move up/down, enable, disable, field submits) into model mutations.

use tracing::debug;

use crate::catalog::Item;
use crate::error::{PrefError, Result};
use crate::model::{DisabledList, EnabledList, RecordModel};
use crate::storage::{PrefKey, PrefValue};

/// Single-selection controller over the enabled and disabled lists.
///
/// Gesture methods return `Ok(false)` when they are no-ops (nothing
/// selected, or already at the edge of the list).
#[derive(Debug)]
pub struct PreferenceController<'a> {
    record: &'a RecordModel,
    enabled: EnabledList<'a>,
    disabled: DisabledList<'a>,
    enabled_selection: Option<usize>,
    disabled_selection: Option<usize>,
}

impl<'a> PreferenceController<'a> {
    pub fn new(record: &'a RecordModel) -> Self {
        Self {
            record,
            enabled: EnabledList::new(record),
            disabled: DisabledList::new(record),
            enabled_selection: None,
            disabled_selection: None,
        }
    }

    pub fn record(&self) -> &RecordModel {
        self.record
    }

    pub fn enabled(&self) -> &EnabledList<'a> {
        &self.enabled
    }

    pub fn disabled(&self) -> &DisabledList<'a> {
        &self.disabled
    }

    pub fn enabled_selection(&self) -> Option<usize> {
        self.enabled_selection
    }

    pub fn disabled_selection(&self) -> Option<usize> {
        self.disabled_selection
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a row of the enabled list, or clear the selection with `None`.
    pub fn select_enabled(&mut self, row: Option<usize>) -> Result<()> {
        self.enabled_selection = checked_row(row, self.enabled.count()?)?;
        Ok(())
    }

    /// Select a row of the disabled list, or clear the selection with `None`.
    pub fn select_disabled(&mut self, row: Option<usize>) -> Result<()> {
        self.disabled_selection = checked_row(row, self.disabled.count()?)?;
        Ok(())
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Move the selected enabled item one row up; the selection follows it.
    pub fn move_up(&mut self) -> Result<bool> {
        let Some(row) = self.enabled_selection else {
            return Ok(false);
        };
        if row == 0 {
            return Ok(false);
        }

        self.enabled.swap(row, row - 1)?;
        self.enabled_selection = Some(row - 1);
        debug!("Moved row {} up", row);
        Ok(true)
    }

    /// Move the selected enabled item one row down; the selection follows it.
    pub fn move_down(&mut self) -> Result<bool> {
        let Some(row) = self.enabled_selection else {
            return Ok(false);
        };
        if row + 1 >= self.enabled.count()? {
            return Ok(false);
        }

        self.enabled.swap(row, row + 1)?;
        self.enabled_selection = Some(row + 1);
        debug!("Moved row {} down", row);
        Ok(true)
    }

    /// Move the selected disabled item to the end of the enabled list.
    pub fn enable(&mut self) -> Result<bool> {
        let Some(row) = self.disabled_selection else {
            return Ok(false);
        };

        let item = self.disabled.item_at(row)?;
        self.enabled.add(item)?;
        self.disabled.refresh();
        self.disabled_selection = None;
        debug!("Enabled {}", item);
        Ok(true)
    }

    /// Move the selected enabled item to the disabled list.
    pub fn disable(&mut self) -> Result<bool> {
        let Some(row) = self.enabled_selection else {
            return Ok(false);
        };

        let item = self.enabled.item_at(row)?;
        self.enabled.remove(item)?;
        self.disabled.refresh();
        self.enabled_selection = None;
        debug!("Disabled {}", item);
        Ok(true)
    }

    /// Select `item` in whichever list holds it.
    pub fn select_item(&mut self, item: Item) -> Result<()> {
        if let Some(row) = self.enabled.items()?.iter().position(|&i| i == item) {
            self.enabled_selection = Some(row);
        } else if let Some(row) = self.disabled.items()?.iter().position(|&i| i == item) {
            self.disabled_selection = Some(row);
        }
        Ok(())
    }

    // =========================================================================
    // Form fields
    // =========================================================================

    /// Submit a form field value through the record model.
    ///
    /// Returns whether the stored value changed.
    pub fn submit(&mut self, key: PrefKey, value: PrefValue) -> Result<bool> {
        Ok(self.record.set(key, value)?.changed())
    }

    /// Flip a boolean preference and return its new value.
    pub fn toggle(&mut self, key: PrefKey) -> Result<bool> {
        let current = self
            .record
            .get(key)?
            .as_bool()
            .ok_or_else(|| PrefError::InvalidInput(format!("'{}' is not a toggle", key)))?;
        self.record.set(key, PrefValue::Bool(!current))?;
        Ok(!current)
    }
}

fn checked_row(row: Option<usize>, len: usize) -> Result<Option<usize>> {
    match row {
        Some(row) if row >= len => Err(PrefError::RowOutOfRange { row, len }),
        other => Ok(other),
    }
}
