use storefront_editor::element::{ElementId, ElementKind, ElementPatch, factory};
use storefront_editor::event::{
    DirtyTracker, DocumentEvent, EditorEvent, ElementEvent, EventLog, HistoryEvent, SelectionEvent,
};
use storefront_editor::state::{EditorContext, EditorStore, StatePersistence};

// Helper to create a store with an event log attached
fn logged_store() -> (EditorStore, EventLog) {
    let store = EditorStore::default();
    let log = EventLog::new(32);
    store.subscribe(Box::new(log.clone()));
    assert_eq!(store.event_bus().handler_count(), 1);
    (store, log)
}

#[test]
fn test_mutations_emit_events() {
    let (mut store, log) = logged_store();

    store.add_element(factory::create(ElementKind::Text, ElementId(10), 0, 0));
    store.move_element(ElementId(10), 40, 60);
    store.resize_element(ElementId(10), 120, 60);
    store.update_element(ElementId(10), ElementPatch::content("Hi"));
    store.delete_element(ElementId(10));

    assert_eq!(
        log.events(),
        vec![
            EditorEvent::ElementChanged(ElementEvent::Added { id: ElementId(10), kind: ElementKind::Text }),
            EditorEvent::SelectionChanged(SelectionEvent::Selected(ElementId(10))),
            EditorEvent::ElementChanged(ElementEvent::Moved { id: ElementId(10), x: 40, y: 60 }),
            EditorEvent::ElementChanged(ElementEvent::Resized { id: ElementId(10), width: 120, height: 60 }),
            EditorEvent::ElementChanged(ElementEvent::Updated { id: ElementId(10) }),
            EditorEvent::ElementChanged(ElementEvent::Removed { id: ElementId(10) }),
            EditorEvent::SelectionChanged(SelectionEvent::Cleared),
        ]
    );
}

#[test]
fn test_no_op_commands_stay_silent() {
    let (mut store, log) = logged_store();

    store.move_element(ElementId(99), 0, 0);
    store.select_element(None);
    store.undo();
    store.update_element(ElementId(1), ElementPatch::default());

    assert!(log.is_empty());
}

#[test]
fn test_history_events_report_cursor() {
    let (mut store, log) = logged_store();

    store.move_element(ElementId(1), 0, 0);
    store.commit();
    store.undo();
    store.redo();

    let history: Vec<_> = log
        .events()
        .into_iter()
        .filter(|event| matches!(event, EditorEvent::HistoryChanged(_)))
        .collect();
    assert_eq!(
        history,
        vec![
            EditorEvent::HistoryChanged(HistoryEvent::Committed { cursor: 1, len: 2 }),
            EditorEvent::HistoryChanged(HistoryEvent::Undone { cursor: 0 }),
            EditorEvent::HistoryChanged(HistoryEvent::Redone { cursor: 1 }),
        ]
    );
}

#[test]
fn test_event_log_keeps_newest_events() {
    let (mut store, log) = logged_store();

    for _ in 0..40 {
        store.toggle_grid();
    }

    assert_eq!(log.len(), 32);
    log.clear();
    assert!(log.is_empty());
}

#[test]
fn test_dirty_tracker_follows_document_changes() {
    let store = EditorStore::default();
    let tracker = DirtyTracker::new();
    let dirty = tracker.clone();
    store.subscribe(Box::new(tracker));

    let mut context = EditorContext::new(store);
    assert!(!dirty.is_dirty());

    // View changes are not document changes
    context.store_mut().toggle_grid();
    context.store_mut().select_element(Some(ElementId(2)));
    assert!(!dirty.is_dirty());

    context.insert(ElementKind::Button, 100, 100).unwrap();
    assert!(dirty.is_dirty());

    let dir = std::env::temp_dir().join(format!("storefront_editor_dirty_{}", uuid::Uuid::new_v4()));
    let persistence = StatePersistence::new(&dir);
    persistence.save_snapshot(context.store(), "dirty").unwrap();
    assert!(!dirty.is_dirty());

    context.undo();
    assert!(dirty.is_dirty());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_gesture_emits_state_changes() {
    let (store, log) = logged_store();
    let mut context = EditorContext::new(store);

    context.begin_drop(ElementKind::Image).unwrap();
    context.finish_drop(None).unwrap();

    let states: Vec<_> = log
        .events()
        .into_iter()
        .filter_map(|event| match event {
            EditorEvent::StateChanged { new, .. } => Some(new.name()),
            _ => None,
        })
        .collect();
    assert_eq!(states, vec!["Dropping", "Idle"]);
    assert!(!log.events().iter().any(|event| matches!(event, EditorEvent::DocumentChanged(DocumentEvent::Saved))));
}

#[test]
fn test_cloned_bus_starts_without_subscribers() {
    let (store, log) = logged_store();
    let detached = store.event_bus().clone();
    assert_eq!(detached.handler_count(), 0);

    detached.emit(EditorEvent::DocumentChanged(DocumentEvent::Saved));
    assert!(log.is_empty());
}
