//! Read-only list model of the catalog items that are not enabled.

use super::notify::{ModelEvent, Notifier, SubscriptionId};
use super::record::RecordModel;
use crate::catalog::Item;
use crate::error::{PrefError, Result};

/// Derived view: catalog minus the enabled items, in catalog order.
///
/// Recomputed on every call. The model cannot observe the enabled list by
/// itself; whoever mutates it calls [`DisabledList::refresh`] afterwards.
#[derive(Debug)]
pub struct DisabledList<'a> {
    record: &'a RecordModel,
    notifier: Notifier,
}

impl<'a> DisabledList<'a> {
    pub fn new(record: &'a RecordModel) -> Self {
        Self {
            record,
            notifier: Notifier::new(),
        }
    }

    pub fn items(&self) -> Result<Vec<Item>> {
        let enabled = self.record.enabled_items()?;
        Ok(Item::ALL
            .into_iter()
            .filter(|item| !enabled.contains(item))
            .collect())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.items()?.len())
    }

    pub fn item_at(&self, row: usize) -> Result<Item> {
        let items = self.items()?;
        items.get(row).copied().ok_or(PrefError::RowOutOfRange {
            row,
            len: items.len(),
        })
    }

    /// Tell views the content must be recomputed.
    pub fn refresh(&self) {
        self.notifier.emit(ModelEvent::LayoutChanged);
    }

    pub fn subscribe(&self, listener: impl Fn(&ModelEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
