use std::cell::RefCell;
use std::rc::Rc;

use sbodom::{find_element, Element, Event, Key, Modifiers, Tag};
use sbogrid::editor::LAYOUT_KEY;
use sbogrid::{
    AdvisoryLevel, JsonFileStore, LayoutData, LayoutEditor, LayoutStore, Locale, MemoryStore,
    Notification, Page, Position,
};

fn form() -> Element {
    Element::div()
        .id("form")
        .child(
            Element::div()
                .class("form-row")
                .id("row1")
                .child(Element::new(Tag::Label).class("sbo-static-text").id("lbl").text("Code"))
                .child(Element::input("text").class("sbo-edit-text").id("txt")),
        )
        .child(Element::button().class("sbo-button").id("btnSave").text("Save"))
        .child(Element::div().class("sbo-field-group"))
        .child(Element::div().class("plain").id("plain"))
}

fn page() -> Page {
    let mut page = Page::new(Locale::tr());
    page.root_mut().push_child(form());
    page
}

fn key(key: Key) -> Event {
    Event::key(key, Modifiers::new())
}

fn style<'a>(page: &'a Page, id: &str, property: &str) -> Option<&'a str> {
    find_element(page.root(), id).and_then(|el| el.get_style(property))
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_activation_marks_components() {
    let mut page = page();
    let mut editor = LayoutEditor::new("form");

    assert!(editor.toggle(&mut page));
    let root = page.root();
    assert!(find_element(root, "form").unwrap().has_class("sbo-edit-mode-active"));
    for id in ["row1", "lbl", "txt"] {
        let el = find_element(root, id).unwrap();
        assert!(el.has_class("sbo-editable"), "{id} not editable");
        assert_eq!(el.get_style("position"), Some("relative"));
    }
    assert!(!find_element(root, "btnSave").unwrap().has_class("sbo-editable"));
    assert!(!find_element(root, "plain").unwrap().has_class("sbo-editable"));

    // the field group had no id and got one
    let group = find_element(root, "editable-0").unwrap();
    assert!(group.has_class("sbo-field-group"));
}

#[test]
fn test_deactivation_strips_marks_and_offsets() {
    let mut page = page();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);
    editor.select(&mut page, "lbl");
    editor.move_selected(&mut page, 5, 5);

    assert!(!editor.toggle(&mut page));
    let lbl = find_element(page.root(), "lbl").unwrap();
    assert!(!lbl.has_class("sbo-editable"));
    assert!(!lbl.has_class("sbo-selected"));
    assert!(lbl.style.is_empty());
    assert!(find_element(page.root(), "sbo-position-indicator").is_none());
    assert!(!find_element(page.root(), "form").unwrap().has_class("sbo-edit-mode-active"));
    assert_eq!(editor.selected(), None);
}

#[test]
fn test_missing_container_is_a_no_op() {
    let mut page = page();
    let mut editor = LayoutEditor::new("nowhere");
    editor.activate(&mut page);
    assert!(!editor.is_active());
    assert!(!editor.select(&mut page, "lbl"));
}

// ============================================================================
// Selection and movement
// ============================================================================

#[test]
fn test_select_is_exclusive_and_shows_indicator() {
    let mut page = page();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);

    assert!(editor.select(&mut page, "lbl"));
    assert!(editor.select(&mut page, "txt"));
    assert!(!find_element(page.root(), "lbl").unwrap().has_class("sbo-selected"));
    assert!(find_element(page.root(), "txt").unwrap().has_class("sbo-selected"));

    let indicator = find_element(page.root(), "sbo-position-indicator").unwrap();
    assert_eq!(indicator.text_content(), Some("X: 0px, Y: 0px"));

    assert!(!editor.select(&mut page, "plain"));
    assert_eq!(editor.selected(), Some("txt"));
}

#[test]
fn test_select_requires_edit_mode() {
    let mut page = page();
    let mut editor = LayoutEditor::new("form");
    assert!(!editor.select(&mut page, "lbl"));
    assert!(!editor.on_click(&mut page, &Event::click("lbl")));
}

#[test]
fn test_click_selects_closest_editable() {
    let mut page = page();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);

    assert!(editor.on_click(&mut page, &Event::click("txt")));
    assert_eq!(editor.selected(), Some("txt"));
    assert!(!editor.on_click(&mut page, &Event::click("plain")));
}

#[test]
fn test_arrow_keys_move_selection() {
    let mut page = page();
    let mut store = MemoryStore::new();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);
    editor.select(&mut page, "lbl");

    assert!(editor.on_key(&mut page, &mut store, &key(Key::Right)));
    assert!(editor.on_key(&mut page, &mut store, &Event::key(Key::Down, Modifiers::shift())));
    editor.on_key(&mut page, &mut store, &key(Key::Left));
    editor.on_key(&mut page, &mut store, &key(Key::Left));

    assert_eq!(style(&page, "lbl", "left"), Some("-1px"));
    assert_eq!(style(&page, "lbl", "top"), Some("10px"));
    let indicator = find_element(page.root(), "sbo-position-indicator").unwrap();
    assert_eq!(indicator.text_content(), Some("X: -1px, Y: 10px"));
    assert_eq!(editor.positions().get("lbl"), Some(&Position { left: -1, top: 10 }));
}

#[test]
fn test_keys_need_a_selection() {
    let mut page = page();
    let mut store = MemoryStore::new();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);

    assert!(!editor.on_key(&mut page, &mut store, &key(Key::Right)));
    editor.select(&mut page, "lbl");
    assert!(editor.on_key(&mut page, &mut store, &key(Key::Escape)));
    assert_eq!(editor.selected(), None);
    assert!(find_element(page.root(), "sbo-position-indicator").is_none());
    assert!(!editor.on_key(&mut page, &mut store, &key(Key::Up)));
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_save_stores_moved_positions() {
    let mut page = page();
    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = notifications.clone();
    page.subscribe(move |n| sink.borrow_mut().push(n.clone()));

    let mut store = MemoryStore::new();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);
    editor.select(&mut page, "txt");
    editor.move_selected(&mut page, 3, -2);

    let data = editor.save(&mut page, &mut store).unwrap();
    assert_eq!(data.positions.len(), 1);
    assert_eq!(data.positions["txt"], Position { left: 3, top: -2 });

    let saved: LayoutData = serde_json::from_str(&store.get(LAYOUT_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(saved, data);

    let advisories = page.drain_advisories();
    assert_eq!(advisories[0].level, AdvisoryLevel::Success);
    assert!(advisories[0].message.contains("1 bileşenin"));
    assert_eq!(
        *notifications.borrow(),
        vec![Notification::LayoutSaved { positions: 1 }]
    );
}

#[test]
fn test_ctrl_s_saves() {
    let mut page = page();
    let mut store = MemoryStore::new();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);
    editor.select(&mut page, "lbl");

    assert!(editor.on_key(&mut page, &mut store, &Event::key(Key::Char('s'), Modifiers::ctrl())));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_load_reapplies_positions() {
    let mut store = MemoryStore::new();
    {
        let mut page = page();
        let mut editor = LayoutEditor::new("form");
        editor.activate(&mut page);
        editor.select(&mut page, "row1");
        editor.move_selected(&mut page, 20, 4);
        editor.save(&mut page, &mut store).unwrap();
    }

    let mut page = page();
    let mut editor = LayoutEditor::new("form");
    assert!(editor.load(&mut page, &store).unwrap());
    assert_eq!(style(&page, "row1", "left"), Some("20px"));
    assert_eq!(style(&page, "row1", "top"), Some("4px"));
    assert_eq!(style(&page, "row1", "position"), Some("relative"));
    assert_eq!(page.drain_advisories()[0].message, Locale::tr().layout_loaded);
}

#[test]
fn test_load_without_saved_layout() {
    let mut page = page();
    let mut editor = LayoutEditor::new("form");

    assert!(!editor.load(&mut page, &MemoryStore::new()).unwrap());
    let advisories = page.drain_advisories();
    assert_eq!(advisories[0].level, AdvisoryLevel::Info);
}

#[test]
fn test_reset_clears_offsets_and_store() {
    let mut page = page();
    let mut store = MemoryStore::new();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);
    editor.select(&mut page, "lbl");
    editor.move_selected(&mut page, 7, 7);
    editor.save(&mut page, &mut store).unwrap();

    editor.reset(&mut page, &mut store).unwrap();

    assert_eq!(style(&page, "lbl", "left"), None);
    assert!(editor.positions().is_empty());
    assert!(store.is_empty());
    let indicator = find_element(page.root(), "sbo-position-indicator").unwrap();
    assert_eq!(indicator.text_content(), Some("X: 0px, Y: 0px"));
}

#[test]
fn test_json_file_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("layouts"));
    assert_eq!(store.get(LAYOUT_KEY).unwrap(), None);

    let mut page = page();
    let mut editor = LayoutEditor::new("form");
    editor.activate(&mut page);
    editor.select(&mut page, "lbl");
    editor.move_selected(&mut page, 1, 2);
    editor.save(&mut page, &mut store).unwrap();
    assert!(dir.path().join("layouts").join("sbo-layout-data.json").exists());

    let mut fresh = self::page();
    let mut editor = LayoutEditor::new("form");
    assert!(editor.load(&mut fresh, &store).unwrap());
    assert_eq!(style(&fresh, "lbl", "left"), Some("1px"));

    editor.reset(&mut fresh, &mut store).unwrap();
    assert_eq!(store.get(LAYOUT_KEY).unwrap(), None);
    // deleting twice is fine
    store.delete(LAYOUT_KEY).unwrap();
}
