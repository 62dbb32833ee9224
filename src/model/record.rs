//! Single-record model over the preference store.
//!
//! The five preferences are exposed as rows `0..5` of one record, the shape a
//! form binder expects: each form widget is bound to one row and reads or
//! submits that row's value.

use tracing::debug;

use super::notify::{ModelEvent, Notifier, SubscriptionId};
use crate::catalog::Item;
use crate::error::{PrefError, Result};
use crate::storage::{PrefKey, PrefStore, PrefValue};

/// Purpose of a read or write request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Text shown in a list view.
    Display,
    /// Value loaded into, or submitted from, an editing widget.
    Edit,
}

/// Result of a record write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Not an edit request, or no such row.
    Rejected,
    /// Accepted; the stored value already matched.
    Unchanged,
    /// Accepted and persisted.
    Changed,
}

impl WriteOutcome {
    pub fn accepted(self) -> bool {
        self != WriteOutcome::Rejected
    }

    pub fn changed(self) -> bool {
        self == WriteOutcome::Changed
    }
}

/// Record model backed by a [`PrefStore`].
#[derive(Debug)]
pub struct RecordModel {
    store: PrefStore,
    notifier: Notifier,
}

impl RecordModel {
    pub fn new(store: PrefStore) -> Self {
        Self {
            store,
            notifier: Notifier::new(),
        }
    }

    pub fn store(&self) -> &PrefStore {
        &self.store
    }

    /// Number of rows; always one per key.
    pub fn len(&self) -> usize {
        PrefKey::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Read the value at `position`.
    ///
    /// Only [`Role::Edit`] requests yield a value; other roles and
    /// out-of-range positions yield `None`.
    pub fn read(&self, position: usize, role: Role) -> Result<Option<PrefValue>> {
        if role != Role::Edit {
            return Ok(None);
        }
        match PrefKey::from_position(position) {
            Some(key) => self.store.get(key).map(Some),
            None => Ok(None),
        }
    }

    /// Submit `value` for `position`.
    ///
    /// Returns [`WriteOutcome::Rejected`] for a non-edit role or an
    /// out-of-range position. A value of the wrong kind for the key, or text
    /// containing a line break, is an error. Text is stored with surrounding
    /// whitespace trimmed, the same form it is read back in.
    ///
    /// The value is persisted and a single `DataChanged` event for
    /// `position` is emitted only when it differs from the stored value.
    /// Resubmitting an unchanged value returns [`WriteOutcome::Unchanged`]
    /// and emits nothing, so widgets may submit their whole state freely.
    pub fn write(&self, position: usize, value: PrefValue, role: Role) -> Result<WriteOutcome> {
        if role != Role::Edit {
            return Ok(WriteOutcome::Rejected);
        }
        let Some(key) = PrefKey::from_position(position) else {
            return Ok(WriteOutcome::Rejected);
        };
        let value = normalize(key, value)?;

        if value == self.store.get(key)? {
            debug!("Unchanged {}, skipping write", key);
            return Ok(WriteOutcome::Unchanged);
        }
        self.store.set(key, &value)?;
        self.notifier.emit(ModelEvent::row(position));
        Ok(WriteOutcome::Changed)
    }

    /// Typed read of one key.
    pub fn get(&self, key: PrefKey) -> Result<PrefValue> {
        self.store.get(key)
    }

    /// Typed write of one key; same contract as [`RecordModel::write`].
    pub fn set(&self, key: PrefKey, value: PrefValue) -> Result<WriteOutcome> {
        self.write(key.position(), value, Role::Edit)
    }

    /// Current enabled items, in order.
    pub fn enabled_items(&self) -> Result<Vec<Item>> {
        match self.store.get(PrefKey::EnabledItems)? {
            PrefValue::Items(items) => Ok(items),
            other => Err(PrefError::ValueKindMismatch {
                key: PrefKey::EnabledItems,
                expected: PrefKey::EnabledItems.kind(),
                found: other.kind(),
            }),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&ModelEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    #[cfg(test)]
    pub(crate) fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}

/// Check `value` against `key` and bring text into its stored form.
fn normalize(key: PrefKey, value: PrefValue) -> Result<PrefValue> {
    if value.kind() != key.kind() {
        return Err(PrefError::ValueKindMismatch {
            key,
            expected: key.kind(),
            found: value.kind(),
        });
    }
    match value {
        PrefValue::Text(text) if text.contains(['\n', '\r']) => Err(PrefError::InvalidInput(
            format!("'{}' must be a single line", key),
        )),
        PrefValue::Text(text) => Ok(PrefValue::Text(text.trim().to_string())),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notify::record_events;

    fn temp_model() -> (tempfile::TempDir, RecordModel) {
        let dir = tempfile::tempdir().unwrap();
        let model = RecordModel::new(PrefStore::new(dir.path().join("pref.txt")));
        (dir, model)
    }

    #[test]
    fn test_len_is_fixed() {
        let (_dir, model) = temp_model();
        assert_eq!(model.len(), 5);
        assert!(!model.is_empty());
    }

    #[test]
    fn test_read_edit_role_only() {
        let (_dir, model) = temp_model();
        assert_eq!(
            model.read(2, Role::Edit).unwrap(),
            Some(PrefValue::Text("Hello World".into()))
        );
        assert_eq!(model.read(2, Role::Display).unwrap(), None);
        assert_eq!(model.read(5, Role::Edit).unwrap(), None);
    }

    #[test]
    fn test_changed_write_notifies_once() {
        let (_dir, model) = temp_model();
        let events = record_events(model.notifier());

        assert_eq!(
            model.write(0, PrefValue::Bool(false), Role::Edit).unwrap(),
            WriteOutcome::Changed
        );

        assert_eq!(*events.borrow(), vec![ModelEvent::row(0)]);
        assert_eq!(model.get(PrefKey::Option1).unwrap(), PrefValue::Bool(false));
    }

    #[test]
    fn test_unchanged_write_is_silent() {
        let (_dir, model) = temp_model();
        let events = record_events(model.notifier());

        assert_eq!(
            model.write(3, PrefValue::Text("Bye".into()), Role::Edit).unwrap(),
            WriteOutcome::Unchanged
        );
        let outcome = model.set(PrefKey::Option2, PrefValue::Bool(false)).unwrap();
        assert!(outcome.accepted());
        assert!(!outcome.changed());

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_write_rejects_bad_position_and_role() {
        let (_dir, model) = temp_model();
        let events = record_events(model.notifier());

        assert_eq!(
            model.write(7, PrefValue::Bool(false), Role::Edit).unwrap(),
            WriteOutcome::Rejected
        );
        assert!(!model
            .write(0, PrefValue::Bool(false), Role::Display)
            .unwrap()
            .accepted());

        assert!(events.borrow().is_empty());
        assert_eq!(model.get(PrefKey::Option1).unwrap(), PrefValue::Bool(true));
    }

    #[test]
    fn test_write_kind_mismatch() {
        let (_dir, model) = temp_model();
        let err = model
            .set(PrefKey::Option1, PrefValue::Text("yes".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            PrefError::ValueKindMismatch {
                key: PrefKey::Option1,
                ..
            }
        ));
    }

    #[test]
    fn test_enabled_items() {
        let (_dir, model) = temp_model();
        assert_eq!(
            model.enabled_items().unwrap(),
            vec![Item::Apple, Item::Orange, Item::Banana]
        );
    }

    #[test]
    fn test_write_rejects_line_breaks() {
        let (_dir, model) = temp_model();
        model.store().ensure_exists().unwrap();
        let events = record_events(model.notifier());

        for text in ["a\nb", "a\r\nb", "trailing\n"] {
            assert!(matches!(
                model.set(PrefKey::Line1, PrefValue::Text(text.into())),
                Err(PrefError::InvalidInput(_))
            ));
        }

        assert!(events.borrow().is_empty());
        let content = std::fs::read_to_string(model.store().path()).unwrap();
        assert_eq!(content.lines().count(), 5);
        assert_eq!(
            model.enabled_items().unwrap(),
            vec![Item::Apple, Item::Orange, Item::Banana]
        );
    }

    #[test]
    fn test_padded_text_resubmit_is_silent() {
        let (_dir, model) = temp_model();
        let events = record_events(model.notifier());

        assert!(model
            .set(PrefKey::Line1, PrefValue::Text(" hi ".into()))
            .unwrap()
            .changed());
        for _ in 0..2 {
            assert_eq!(
                model.set(PrefKey::Line1, PrefValue::Text(" hi ".into())).unwrap(),
                WriteOutcome::Unchanged
            );
        }

        assert_eq!(
            *events.borrow(),
            vec![ModelEvent::row(PrefKey::Line1.position())]
        );
        assert_eq!(
            model.get(PrefKey::Line1).unwrap(),
            PrefValue::Text("hi".into())
        );
    }
}
