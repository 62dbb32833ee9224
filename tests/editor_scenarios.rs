//! End-to-end editing scenarios against a real backing file.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use pref_editor::catalog::Item;
use pref_editor::controller::PreferenceController;
use pref_editor::model::{ModelEvent, RecordModel};
use pref_editor::storage::{PrefKey, PrefStore, PrefValue};

fn temp_record() -> (tempfile::TempDir, RecordModel) {
    let dir = tempfile::tempdir().unwrap();
    let record = RecordModel::new(PrefStore::new(dir.path().join("pref.txt")));
    (dir, record)
}

#[test]
fn enable_mango_from_defaults() {
    let (_dir, record) = temp_record();
    let mut controller = PreferenceController::new(&record);

    let mango_row = controller
        .disabled()
        .items()
        .unwrap()
        .iter()
        .position(|&item| item == Item::Mango)
        .unwrap();
    controller.select_disabled(Some(mango_row)).unwrap();
    assert!(controller.enable().unwrap());

    assert_eq!(
        controller.enabled().items().unwrap(),
        vec![Item::Apple, Item::Orange, Item::Banana, Item::Mango]
    );
    assert_eq!(
        controller.disabled().items().unwrap(),
        vec![Item::Grapes, Item::Strawberry, Item::Watermelon, Item::Plum]
    );
    assert_eq!(controller.disabled_selection(), None);
}

#[test]
fn move_first_row_down_from_defaults() {
    let (_dir, record) = temp_record();
    let mut controller = PreferenceController::new(&record);

    controller.select_enabled(Some(0)).unwrap();
    assert!(controller.move_down().unwrap());

    assert_eq!(
        controller.enabled().items().unwrap(),
        vec![Item::Orange, Item::Apple, Item::Banana]
    );
    assert_eq!(controller.enabled_selection(), Some(1));
}

#[test]
fn toggle_option1_persists_to_file() {
    let (dir, record) = temp_record();
    let mut controller = PreferenceController::new(&record);

    assert!(!controller.toggle(PrefKey::Option1).unwrap());

    let content = fs::read_to_string(dir.path().join("pref.txt")).unwrap();
    assert_eq!(content.lines().next(), Some("False"));

    let reopened = PrefStore::new(dir.path().join("pref.txt"));
    assert_eq!(reopened.get(PrefKey::Option1).unwrap(), PrefValue::Bool(false));
}

#[test]
fn views_are_notified_of_gestures() {
    let (_dir, record) = temp_record();
    let mut controller = PreferenceController::new(&record);

    let enabled_events = Rc::new(RefCell::new(Vec::new()));
    let disabled_events = Rc::new(RefCell::new(Vec::new()));
    {
        let sink = Rc::clone(&enabled_events);
        controller
            .enabled()
            .subscribe(move |event| sink.borrow_mut().push(*event));
        let sink = Rc::clone(&disabled_events);
        controller
            .disabled()
            .subscribe(move |event| sink.borrow_mut().push(*event));
    }

    controller.select_enabled(Some(1)).unwrap();
    controller.move_up().unwrap();
    controller.disable().unwrap();

    assert_eq!(
        *enabled_events.borrow(),
        vec![
            ModelEvent::row(1),
            ModelEvent::row(0),
            ModelEvent::LayoutChanged
        ]
    );
    assert_eq!(*disabled_events.borrow(), vec![ModelEvent::LayoutChanged]);
    // Orange moved to the top, then was disabled
    assert_eq!(
        controller.enabled().items().unwrap(),
        vec![Item::Apple, Item::Banana]
    );
}

#[test]
fn resubmitting_form_state_is_silent() {
    let (_dir, record) = temp_record();
    let changes = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&changes);
    record.subscribe(move |_| *sink.borrow_mut() += 1);

    // A form submits every bound field, changed or not
    for key in PrefKey::ALL {
        let current = record.get(key).unwrap();
        let outcome = record.set(key, current).unwrap();
        assert!(outcome.accepted() && !outcome.changed());
    }
    assert_eq!(*changes.borrow(), 0);

    record
        .set(PrefKey::Line2, PrefValue::Text("See you".into()))
        .unwrap();
    assert_eq!(*changes.borrow(), 1);
}

#[test]
fn disabling_everything_then_reenabling() {
    let (_dir, record) = temp_record();
    let mut controller = PreferenceController::new(&record);

    while controller.enabled().count().unwrap() > 0 {
        controller.select_enabled(Some(0)).unwrap();
        assert!(controller.disable().unwrap());
    }
    assert_eq!(controller.disabled().items().unwrap(), Item::ALL.to_vec());
    assert_eq!(
        record.store().get(PrefKey::EnabledItems).unwrap(),
        PrefValue::Items(vec![])
    );

    controller.select_disabled(Some(7)).unwrap();
    controller.enable().unwrap();
    assert_eq!(controller.enabled().items().unwrap(), vec![Item::Plum]);
}
