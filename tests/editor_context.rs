use storefront_editor::config::EditorConfig;
use storefront_editor::document::Document;
use storefront_editor::element::{Element, ElementId, ElementKind};
use storefront_editor::error::TransitionError;
use storefront_editor::page::PageSettings;
use storefront_editor::state::{EditorContext, EditorState, EditorStore};

// Helper to create a context around one container at (40, 40)
fn create_test_context() -> EditorContext {
    let element = Element::new(ElementId(1), ElementKind::Container, 40, 40, 200, 100);
    let store = EditorStore::with_document(
        Document::new(vec![element], PageSettings::default()),
        EditorConfig::default(),
    );
    EditorContext::new(store)
}

#[test]
fn test_context_starts_idle() {
    let context = create_test_context();
    assert!(context.current_state().is_idle());
    assert!(context.store().dragged().is_none());
}

#[test]
fn test_drop_places_snaps_selects_and_commits() {
    let mut context = create_test_context();

    let id = context.begin_drop(ElementKind::Button).unwrap();
    assert!(context.current_state().is_dropping());
    assert_eq!(context.store().dragged().map(|element| element.id), Some(id));
    assert!(context.store().element(id).is_none());

    let placed = context.finish_drop(Some((133, 71))).unwrap();
    assert_eq!(placed, Some(id));
    assert!(context.current_state().is_idle());
    assert!(context.store().dragged().is_none());

    let button = context.store().element(id).unwrap();
    assert_eq!((button.x, button.y), (140, 80));
    assert_eq!((button.width, button.height), (150, 45));
    assert_eq!(button.content.as_deref(), Some("Click me"));
    assert_eq!(context.store().selected(), Some(id));
    assert_eq!(context.store().history().len(), 2);
}

#[test]
fn test_dropped_ids_never_collide() {
    let mut context = create_test_context();

    let first = context.insert(ElementKind::Text, 0, 0).unwrap().unwrap();
    let second = context.insert(ElementKind::Text, 0, 0).unwrap().unwrap();

    assert_ne!(first, ElementId(1));
    assert_ne!(first, second);
    assert_eq!(context.store().elements().len(), 3);
}

#[test]
fn test_cancelled_drop_leaves_store_unchanged() {
    let mut context = create_test_context();
    let before = context.store().elements().to_vec();

    context.begin_drop(ElementKind::Image).unwrap();
    let placed = context.finish_drop(None).unwrap();

    assert_eq!(placed, None);
    assert!(context.current_state().is_idle());
    assert!(context.store().dragged().is_none());
    assert_eq!(context.store().elements(), before.as_slice());
    assert!(!context.store().can_undo());
}

#[test]
fn test_cancel_during_drop_discards_candidate() {
    let mut context = create_test_context();

    context.begin_drop(ElementKind::Heading).unwrap();
    context.cancel().unwrap();

    assert!(context.current_state().is_idle());
    assert!(context.store().dragged().is_none());
    assert_eq!(context.store().elements().len(), 1);
}

#[test]
fn test_move_gesture_commits_exactly_once() {
    let mut context = create_test_context();

    context.begin_move(ElementId(1)).unwrap();
    assert_eq!(context.store().selected(), Some(ElementId(1)));

    for dx in [3, 11, 27, 45, 61] {
        context.update_live(dx, dx / 2);
    }
    assert_eq!(context.store().history().len(), 1);

    assert!(context.finish().unwrap());
    assert!(context.current_state().is_idle());
    assert_eq!(context.store().history().len(), 2);

    let element = context.store().element(ElementId(1)).unwrap();
    assert_eq!((element.x, element.y), (100, 80));

    context.undo();
    let element = context.store().element(ElementId(1)).unwrap();
    assert_eq!((element.x, element.y), (40, 40));
}

#[test]
fn test_gesture_without_change_does_not_commit() {
    let mut context = create_test_context();

    context.begin_move(ElementId(1)).unwrap();
    context.update_live(4, -3);
    assert!(!context.finish().unwrap());

    assert!(!context.store().can_undo());
}

#[test]
fn test_resize_gesture_respects_minimum_size() {
    let mut context = create_test_context();

    context.begin_resize(ElementId(1)).unwrap();
    assert!(context.current_state().is_resizing());
    context.update_live(-1000, -1000);
    context.finish().unwrap();

    let element = context.store().element(ElementId(1)).unwrap();
    assert!(element.width >= 50);
    assert!(element.height >= 30);
    assert_eq!((element.x, element.y), (40, 40));
}

#[test]
fn test_cancel_restores_starting_geometry() {
    let mut context = create_test_context();

    context.begin_resize(ElementId(1)).unwrap();
    context.update_live(80, 80);
    assert_eq!(context.store().element(ElementId(1)).unwrap().width, 280);

    context.cancel().unwrap();

    let element = context.store().element(ElementId(1)).unwrap();
    assert_eq!((element.width, element.height), (200, 100));
    assert!(context.current_state().is_idle());
    assert!(!context.store().can_undo());
}

#[test]
fn test_gesture_on_missing_element_fails() {
    let mut context = create_test_context();

    assert_eq!(
        context.begin_move(ElementId(42)),
        Err(TransitionError::ElementNotFound(ElementId(42)))
    );
    assert!(context.begin_resize(ElementId(42)).is_err());
    assert!(context.current_state().is_idle());
}

#[test]
fn test_gestures_do_not_chain() {
    let mut context = create_test_context();

    context.begin_move(ElementId(1)).unwrap();
    let result = context.begin_resize(ElementId(1));

    assert!(matches!(
        result,
        Err(TransitionError::InvalidStateTransition { from: "Moving", to: "Resizing" })
    ));
    assert!(context.current_state().is_moving());
}

#[test]
fn test_finish_while_idle_is_an_error() {
    let mut context = create_test_context();

    assert!(context.finish().is_err());
    assert!(context.finish_drop(Some((0, 0))).is_err());
    assert!(!context.update_live(10, 10));
}

#[test]
fn test_delete_selected_is_undoable() {
    let mut context = create_test_context();
    assert!(!context.delete_selected());

    context.store_mut().select_element(Some(ElementId(1)));
    assert!(context.delete_selected());
    assert!(context.store().elements().is_empty());
    assert_eq!(context.store().selected(), None);

    context.undo();
    assert_eq!(context.store().elements().len(), 1);
}

#[test]
fn test_load_document_resets_session() {
    let mut context = create_test_context();
    context.begin_move(ElementId(1)).unwrap();
    context.update_live(100, 0);

    let replacement = Document::new(
        vec![Element::new(ElementId(7), ElementKind::Text, 0, 0, 100, 40)],
        PageSettings::default(),
    );
    context.load_document(replacement);

    assert_eq!(*context.current_state(), EditorState::Idle);
    assert!(!context.store().can_undo());
    assert_eq!(context.store().selected(), None);

    let id = context.insert(ElementKind::Text, 0, 0).unwrap().unwrap();
    assert_eq!(id, ElementId(8));
}
