//! Ordered list model over the enabled-items preference.

use super::notify::{ModelEvent, Notifier, SubscriptionId};
use super::record::RecordModel;
use crate::catalog::Item;
use crate::error::{PrefError, Result};
use crate::storage::{PrefKey, PrefValue};

/// Mutable, ordered view of the enabled items.
///
/// Holds no items of its own: every call re-reads the list through the
/// record model, and every mutation writes the whole list back.
#[derive(Debug)]
pub struct EnabledList<'a> {
    record: &'a RecordModel,
    notifier: Notifier,
}

impl<'a> EnabledList<'a> {
    pub fn new(record: &'a RecordModel) -> Self {
        Self {
            record,
            notifier: Notifier::new(),
        }
    }

    pub fn items(&self) -> Result<Vec<Item>> {
        self.record.enabled_items()
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

    /// Exchange two rows and emit one `DataChanged` per row.
    pub fn swap(&self, first: usize, second: usize) -> Result<()> {
        let mut items = self.items()?;
        let len = items.len();
        for row in [first, second] {
            if row >= len {
                return Err(PrefError::RowOutOfRange { row, len });
            }
        }

        items.swap(first, second);
        self.store(items)?;
        self.notifier.emit(ModelEvent::row(first));
        self.notifier.emit(ModelEvent::row(second));
        Ok(())
    }

    /// Append `item` and emit `LayoutChanged`. Duplicates are not rejected.
    pub fn add(&self, item: Item) -> Result<()> {
        let mut items = self.items()?;
        items.push(item);
        self.store(items)?;
        self.notifier.emit(ModelEvent::LayoutChanged);
        Ok(())
    }

    /// Remove the first occurrence of `item` and emit `LayoutChanged`.
    pub fn remove(&self, item: Item) -> Result<()> {
        let mut items = self.items()?;
        let index = items
            .iter()
            .position(|&existing| existing == item)
            .ok_or(PrefError::ItemNotEnabled(item))?;

        items.remove(index);
        self.store(items)?;
        self.notifier.emit(ModelEvent::LayoutChanged);
        Ok(())
    }

    pub fn subscribe(&self, listener: impl Fn(&ModelEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn store(&self, items: Vec<Item>) -> Result<()> {
        self.record
            .set(PrefKey::EnabledItems, PrefValue::Items(items))
            .map(|_| ())
    }
}
