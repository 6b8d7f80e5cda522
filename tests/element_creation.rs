use storefront_editor::document::Document;
use storefront_editor::element::{
    Element, ElementId, ElementKind, ElementPatch, KindCategory, StyleMap, factory,
};
use storefront_editor::id_generator::IdGenerator;
use storefront_editor::page::PageSettings;

#[test]
fn test_factory_defaults_per_kind() {
    let expected = [
        (ElementKind::Text, 200, 40, Some("Your text here")),
        (ElementKind::Heading, 400, 60, Some("Your Heading Here")),
        (ElementKind::Paragraph, 400, 80, Some("Your paragraph text goes here. Click to edit and customize.")),
        (ElementKind::Image, 300, 200, None),
        (ElementKind::Button, 150, 45, Some("Click me")),
        (ElementKind::Container, 400, 200, None),
    ];

    for (kind, width, height, content) in expected {
        let element = factory::create(kind, ElementId(1), 10, 20);
        assert_eq!(element.kind, kind);
        assert_eq!((element.x, element.y), (10, 20));
        assert_eq!((element.width, element.height), (width, height), "size of {}", kind);
        assert_eq!(element.content.as_deref(), content, "content of {}", kind);
    }

    let image = factory::create(ElementKind::Image, ElementId(2), 0, 0);
    assert_eq!(image.src.as_deref(), Some(""));
    assert_eq!(image.alt.as_deref(), Some("Image"));
}

#[test]
fn test_starter_page_has_unique_ids() {
    let elements = factory::starter_elements();
    let ids: Vec<usize> = elements.iter().map(|element| element.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let kinds: Vec<ElementKind> = elements.iter().map(|element| element.kind).collect();
    assert_eq!(
        kinds,
        vec![ElementKind::Heading, ElementKind::Paragraph, ElementKind::Button, ElementKind::Image]
    );
}

#[test]
fn test_text_patch_ignored_by_images_and_containers() {
    let mut image = factory::create(ElementKind::Image, ElementId(1), 0, 0);
    assert!(!image.apply(&ElementPatch::content("caption")));
    assert_eq!(image.content, None);

    assert!(image.apply(&ElementPatch::source("https://example.com/shoe.png").with_alt("Red shoe")));
    assert_eq!(image.src.as_deref(), Some("https://example.com/shoe.png"));
    assert_eq!(image.alt.as_deref(), Some("Red shoe"));

    let mut container = factory::create(ElementKind::Container, ElementId(2), 0, 0);
    assert!(!container.apply(&ElementPatch::content("inside")));

    let mut button = factory::create(ElementKind::Button, ElementId(3), 0, 0);
    assert!(!button.apply(&ElementPatch::source("https://example.com/a.png")));
    assert!(button.apply(&ElementPatch::content("Shop now")));
    assert_eq!(button.content.as_deref(), Some("Shop now"));
}

#[test]
fn test_patch_geometry_and_styles() {
    let mut element = Element::new(ElementId(1), ElementKind::Text, 0, 0, 100, 40);

    let patch = ElementPatch::default()
        .with_position(60, 80)
        .with_size(0, 90)
        .with_style("color", "#6366f1");
    assert!(element.apply(&patch));

    assert_eq!((element.x, element.y), (60, 80));
    assert_eq!((element.width, element.height), (1, 90));
    assert_eq!(element.styles.get("color"), Some("#6366f1"));
    assert!(!element.apply(&patch));
    assert!(ElementPatch::default().is_empty());
    assert!(!patch.is_empty());
}

#[test]
fn test_style_map_merge_is_last_write_wins() {
    let mut styles = StyleMap::new().with("color", "#000000").with("fontSize", "16px");
    styles.merge(&StyleMap::new().with("color", "#ffffff"));

    assert_eq!(styles.get("color"), Some("#ffffff"));
    assert_eq!(styles.get("fontSize"), Some("16px"));
    assert_eq!(styles.len(), 2);
    assert_eq!(styles.remove("fontSize").as_deref(), Some("16px"));
}

#[test]
fn test_element_serializes_with_type_tag() {
    let element = factory::create(ElementKind::Paragraph, ElementId(7), 20, 40);
    let value = serde_json::to_value(&element).unwrap();

    assert_eq!(value["type"], "paragraph");
    assert_eq!(value["id"], 7);
    assert!(value.get("kind").is_none());

    let parsed: Element = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, element);
}

#[test]
fn test_categories_cover_every_kind_once() {
    let mut listed: Vec<ElementKind> = KindCategory::ALL
        .iter()
        .flat_map(|category| category.kinds().iter().copied())
        .collect();
    listed.sort_by_key(|kind| kind.as_str());
    let mut all = ElementKind::ALL.to_vec();
    all.sort_by_key(|kind| kind.as_str());

    assert_eq!(listed, all);
    assert!(ElementKind::Button.accepts_text());
    assert!(!ElementKind::Image.accepts_text());
    assert!(ElementKind::Image.accepts_source());
}

#[test]
fn test_hit_testing_prefers_topmost_element() {
    let document = Document::new(
        vec![
            Element::new(ElementId(1), ElementKind::Container, 0, 0, 400, 200),
            Element::new(ElementId(2), ElementKind::Button, 100, 50, 150, 45),
        ],
        PageSettings::default(),
    );

    assert_eq!(document.element_at(120.0, 60.0).map(|element| element.id), Some(ElementId(2)));
    assert_eq!(document.element_at(10.0, 10.0).map(|element| element.id), Some(ElementId(1)));
    assert!(document.element_at(500.0, 500.0).is_none());
    assert_eq!(document.max_id(), Some(ElementId(2)));
}

#[test]
fn test_id_generator_skips_existing_ids() {
    let mut ids = IdGenerator::starting_after(&factory::starter_elements());
    assert_eq!(ids.next_id(), Some(ElementId(5)));

    ids.observe(ElementId(20));
    assert_eq!(ids.next_id(), Some(ElementId(21)));

    ids.observe(ElementId(3));
    assert_eq!(ids.next_id(), Some(ElementId(22)));

    assert_eq!(IdGenerator::default().next_id(), Some(ElementId(1)));
}

#[test]
fn test_id_generator_stops_at_the_end_of_the_id_space() {
    let elements = vec![Element::new(ElementId(usize::MAX), ElementKind::Text, 0, 0, 100, 40)];
    let mut ids = IdGenerator::starting_after(&elements);
    assert!(ids.is_exhausted());
    assert_eq!(ids.next_id(), None);

    let mut ids = IdGenerator::default();
    ids.observe(ElementId(usize::MAX - 1));
    assert_eq!(ids.next_id(), Some(ElementId(usize::MAX)));
    assert_eq!(ids.next_id(), None);
}
