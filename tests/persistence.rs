use std::fs;
use std::path::PathBuf;

use storefront_editor::config::EditorConfig;
use storefront_editor::element::{ElementId, ElementKind, ElementPatch};
use storefront_editor::error::TransitionError;
use storefront_editor::state::{
    EXPORT_FILE_NAME, EXPORT_VERSION, EditorContext, EditorSnapshot, EditorStore, ExportDocument,
    SESSION_NAME, StatePersistence,
};

// A fresh scratch directory per test
fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("storefront_editor_{}_{}", name, uuid::Uuid::new_v4()))
}

#[test]
fn test_export_document_shape() {
    let store = EditorStore::default();
    let json = ExportDocument::from_store(&store).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], EXPORT_VERSION);
    assert_eq!(value["pageSettings"]["backgroundColor"], "#ffffff");
    assert_eq!(value["pageSettings"]["fontFamily"], "Inter, sans-serif");

    let first = &value["elements"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["type"], "heading");
    assert_eq!(first["x"], 100);
    assert_eq!(first["width"], 600);
    assert_eq!(first["styles"]["fontSize"], "48px");
    assert!(first.get("src").is_none());

    assert_eq!(value["elements"][3]["type"], "image");
    assert_eq!(value["elements"][3]["alt"], "Hero Image");
}

#[test]
fn test_import_source_format_document() {
    let json = r##"{
        "elements": [
            {"id": 5, "type": "button", "x": 20, "y": 40, "width": 150, "height": 45,
             "content": "Buy now", "styles": {"backgroundColor": "#3b82f6"}},
            {"id": 9, "type": "container", "x": 0, "y": 100, "width": 400, "height": 200}
        ],
        "pageSettings": {
            "backgroundColor": "#f3f4f6",
            "fontFamily": "Lato, sans-serif",
            "maxWidth": "960px",
            "padding": "24px"
        },
        "version": "1.0"
    }"##;

    let document = ExportDocument::from_json(json).unwrap().into_document();

    assert_eq!(document.len(), 2);
    let button = document.element(ElementId(5)).unwrap();
    assert_eq!(button.kind, ElementKind::Button);
    assert_eq!(button.content.as_deref(), Some("Buy now"));
    assert_eq!(button.styles.get("backgroundColor"), Some("#3b82f6"));
    assert!(document.element(ElementId(9)).unwrap().styles.is_empty());
    assert_eq!(document.page_settings().max_width, "960px");
}

#[test]
fn test_snapshot_round_trip() {
    let dir = scratch_dir("round_trip");
    let persistence = StatePersistence::new(&dir);

    let mut store = EditorStore::default();
    store.update_element(ElementId(1), ElementPatch::content("Grand Opening"));
    store.move_element(ElementId(3), 320, 280);
    store.set_zoom(1.5);
    store.toggle_grid();

    let path = persistence.save_snapshot(&store, SESSION_NAME).unwrap();
    assert!(path.exists());

    let restored = persistence.load_or_default(SESSION_NAME, EditorConfig::default());
    assert_eq!(restored.document(), store.document());
    assert_eq!(restored.view(), store.view());
    assert!(!restored.can_undo());

    let snapshot = persistence.load_snapshot(SESSION_NAME).unwrap();
    assert_eq!(snapshot.session_id(), store.document().id());
    assert_eq!(snapshot.version, env!("CARGO_PKG_VERSION"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_session_falls_back_to_default() {
    let persistence = StatePersistence::new(scratch_dir("missing"));

    assert!(persistence.load_snapshot(SESSION_NAME).is_err());

    let store = persistence.load_or_default(SESSION_NAME, EditorConfig::default());
    assert_eq!(store.elements().len(), 4);
}

#[test]
fn test_malformed_session_falls_back_to_default() {
    let dir = scratch_dir("malformed");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.json", SESSION_NAME)), "{\"document\": [1, 2").unwrap();

    let persistence = StatePersistence::new(&dir);
    let store = persistence.load_or_default(SESSION_NAME, EditorConfig::default());

    assert_eq!(store.elements(), EditorStore::default().elements());
    assert_eq!(store.view().zoom, 1.0);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_decode_rejects_malformed_snapshot() {
    assert!(EditorSnapshot::decode("not json at all").is_none());
    assert!(EditorSnapshot::decode("{\"view\": {}}").is_none());

    let json = serde_json::to_string(&EditorSnapshot::new(&EditorStore::default())).unwrap();
    assert!(EditorSnapshot::decode(&json).is_some());
}

#[test]
fn test_restore_clamps_zoom_into_config_range() {
    let mut snapshot = EditorSnapshot::new(&EditorStore::default());
    snapshot.view.zoom = 9.0;

    let store = snapshot.restore(EditorConfig::default());
    assert_eq!(store.view().zoom, 2.0);
}

#[test]
fn test_export_writes_file_and_imports_back() {
    let dir = scratch_dir("export");
    let persistence = StatePersistence::new(&dir);
    let store = EditorStore::default();

    let path = persistence.export(&store).unwrap();
    assert_eq!(path.file_name().and_then(|name| name.to_str()), Some(EXPORT_FILE_NAME));

    let document = persistence.import(&path).unwrap();
    assert_eq!(document.elements(), store.elements());
    assert_eq!(document.page_settings(), store.page_settings());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_missing_or_malformed_falls_back_to_defaults() {
    let dir = scratch_dir("config");
    assert_eq!(EditorConfig::load(dir.join(EditorConfig::FILE_NAME)), EditorConfig::default());

    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(EditorConfig::FILE_NAME);
    fs::write(&path, "grid_size = 10").unwrap();
    assert_eq!(EditorConfig::load(&path), EditorConfig::default());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_partial_file_overrides_named_fields() {
    let dir = scratch_dir("config_partial");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(EditorConfig::FILE_NAME);
    fs::write(&path, r#"{"grid_size": 10, "history_limit": 50, "min_zoom": -1.0}"#).unwrap();

    let config = EditorConfig::load(&path);
    assert_eq!(config.grid_size, 10);
    assert_eq!(config.history_limit, Some(50));
    assert_eq!(config.min_zoom, 0.25);
    assert!(config.snap_to_grid);
    assert_eq!(config.canvas_width, 1200);

    let mut store = EditorStore::new(config);
    store.move_element(ElementId(1), 14, 16);
    let heading = store.element(ElementId(1)).unwrap();
    assert_eq!((heading.x, heading.y), (10, 20));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_import_keeps_first_element_per_id() {
    let json = r##"{
        "elements": [
            {"id": 7, "type": "text", "x": 0, "y": 0, "width": 200, "height": 40, "content": "first"},
            {"id": 7, "type": "button", "x": 40, "y": 40, "width": 0, "height": 45, "content": "second"},
            {"id": 8, "type": "button", "x": 40, "y": 40, "width": 0, "height": 0}
        ],
        "pageSettings": {"backgroundColor": "#ffffff", "fontFamily": "Inter, sans-serif", "maxWidth": "1200px", "padding": "20px"},
        "version": "1.0"
    }"##;

    let document = ExportDocument::from_json(json).unwrap().into_document();
    let ids: Vec<ElementId> = document.elements().iter().map(|element| element.id).collect();
    assert_eq!(ids, vec![ElementId(7), ElementId(8)]);
    assert_eq!(document.element(ElementId(7)).unwrap().content.as_deref(), Some("first"));

    let button = document.element(ElementId(8)).unwrap();
    assert_eq!((button.width, button.height), (1, 1));

    let mut context = EditorContext::new(EditorStore::default());
    context.load_document(document);
    assert!(context.store_mut().delete_element(ElementId(7)));
    assert!(context.store().element(ElementId(7)).is_none());
    assert_eq!(context.store().elements().len(), 1);
}

#[test]
fn test_restored_snapshot_drops_duplicate_ids() {
    let snapshot = EditorSnapshot::new(&EditorStore::default());
    let mut value = serde_json::to_value(&snapshot).unwrap();
    let elements = value["document"]["elements"].as_array_mut().unwrap();
    let mut copy = elements[0].clone();
    copy["content"] = serde_json::json!("Shadow");
    elements.push(copy);

    let decoded = EditorSnapshot::decode(&value.to_string()).unwrap();
    assert_eq!(decoded.document.len(), 5);

    let store = decoded.restore(EditorConfig::default());
    assert_eq!(store.elements(), EditorStore::default().elements());
}

#[test]
fn test_import_with_largest_id_does_not_overflow() {
    let json = r##"{
        "elements": [
            {"id": 18446744073709551615, "type": "text", "x": 0, "y": 0, "width": 200, "height": 40}
        ],
        "pageSettings": {"backgroundColor": "#ffffff", "fontFamily": "Inter, sans-serif", "maxWidth": "1200px", "padding": "20px"},
        "version": "1.0"
    }"##;

    let document = ExportDocument::from_json(json).unwrap().into_document();
    let mut context = EditorContext::new(EditorStore::default());
    context.load_document(document);

    assert_eq!(context.insert(ElementKind::Text, 0, 0), Err(TransitionError::IdsExhausted));
    assert!(context.current_state().is_idle());
    assert_eq!(context.store().elements().len(), 1);
}

#[test]
fn test_loading_a_session_restores_its_view() {
    let mut store = EditorStore::default();
    store.move_element(ElementId(2), 240, 200);
    store.set_zoom(1.5);
    store.toggle_grid();
    store.toggle_snap();
    let snapshot = EditorSnapshot::new(&store);

    let mut context = EditorContext::new(EditorStore::default());
    context.load_snapshot(snapshot);

    assert_eq!(context.store().view(), store.view());
    assert_eq!(context.store().elements(), store.elements());
    assert!(!context.store().can_undo());
}
