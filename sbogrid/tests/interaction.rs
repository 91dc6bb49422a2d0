use std::cell::RefCell;
use std::rc::Rc;

use sbodom::{collect_by_class, find_element, Event};
use sbogrid::widgets::linked_button;
use sbogrid::{
    render_table, row, AdvisoryLevel, ColumnDescriptor, ColumnType, DataType, EventResult,
    GridOptions, Locale, LookupAction, MatrixOptions, Notification, Page, SequentialIds,
    SortDirection, TableConfig, Value,
};

type Log = Rc<RefCell<Vec<Notification>>>;

fn page_with(configs: &[TableConfig]) -> (Page, Log) {
    let mut page = Page::new(Locale::tr());
    let ids = SequentialIds::new();
    for config in configs {
        page.mount(render_table(config, &ids, page.locale()));
    }
    let log: Log = Rc::default();
    let sink = log.clone();
    page.subscribe(move |n| sink.borrow_mut().push(n.clone()));
    (page, log)
}

fn grid(id: &str) -> TableConfig {
    TableConfig::grid(GridOptions::new(vec![
        row([("code", Value::from("A1")), ("price", Value::from(10))]),
        row([("code", Value::from("B2")), ("price", Value::from(20))]),
        row([("code", Value::from("C3")), ("price", Value::from(30))]),
    ]))
    .id(id)
    .columns([
        ColumnDescriptor::new("code", "Code"),
        ColumnDescriptor::new("price", "Price").data_type(DataType::Currency),
    ])
}

fn matrix(id: &str) -> TableConfig {
    TableConfig::matrix(MatrixOptions::new(4))
        .id(id)
        .columns([
            ColumnDescriptor::new("item", "Item")
                .kind(ColumnType::LookupPair)
                .linked_object("4"),
            ColumnDescriptor::new("qty", "Quantity"),
            ColumnDescriptor::new("free", "Free").kind(ColumnType::BooleanToggle),
        ])
}

fn count_class(page: &Page, class: &str) -> usize {
    collect_by_class(page.root(), class).len()
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_cycle_on_one_header() {
    let (mut page, log) = page_with(&[grid("g")]);

    let mut seen = Vec::new();
    for _ in 0..3 {
        assert_eq!(page.dispatch(&Event::click("g_h_price")), EventResult::Consumed);
        seen.push(page.sort_state("g", "price"));
    }
    assert_eq!(
        seen,
        vec![
            SortDirection::Ascending,
            SortDirection::Descending,
            SortDirection::None
        ]
    );

    let directions: Vec<_> = log
        .borrow()
        .iter()
        .map(|n| match n {
            Notification::SortChanged {
                table_id,
                column_id,
                direction,
            } => {
                assert_eq!(table_id, "g");
                assert_eq!(column_id, "price");
                *direction
            }
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(directions, seen);
}

#[test]
fn test_sorting_another_column_resets_the_first() {
    let (mut page, log) = page_with(&[grid("g")]);

    page.dispatch(&Event::click("g_h_code"));
    page.dispatch(&Event::click("g_h_code"));
    assert_eq!(page.sort_state("g", "code"), SortDirection::Descending);

    page.dispatch(&Event::click("g_h_price"));
    assert_eq!(page.sort_state("g", "code"), SortDirection::None);
    assert_eq!(page.sort_state("g", "price"), SortDirection::Ascending);

    // clicking the first again restarts its cycle
    page.dispatch(&Event::click("g_h_code"));
    assert_eq!(page.sort_state("g", "code"), SortDirection::Ascending);
    assert_eq!(page.sort_state("g", "price"), SortDirection::None);
    assert_eq!(log.borrow().len(), 4);
}

#[test]
fn test_sort_icon_tracks_direction() {
    let (mut page, _) = page_with(&[grid("g")]);

    page.dispatch(&Event::click("g_h_price"));
    let header = find_element(page.root(), "g_h_price").unwrap();
    let icon = collect_by_class(header, "sbo-grid-sort-icon")[0];
    assert!(icon.has_class("sbo-grid-sort-icon--asc"));

    page.dispatch(&Event::click("g_h_code"));
    let header = find_element(page.root(), "g_h_price").unwrap();
    let icon = collect_by_class(header, "sbo-grid-sort-icon")[0];
    assert_eq!(icon.classes, vec!["sbo-grid-sort-icon".to_string()]);
    assert_eq!(header.get_data("sort"), None);
}

#[test]
fn test_sort_does_not_reorder_rows() {
    let (mut page, _) = page_with(&[grid("g")]);
    let before = page.to_html();
    page.dispatch(&Event::click("g_h_price"));

    let rows = collect_by_class(page.root(), "sbo-grid-row");
    let order: Vec<_> = rows.iter().filter_map(|r| r.id_str()).collect();
    assert_eq!(order, vec!["g_r_0", "g_r_1", "g_r_2"]);
    assert_ne!(before, page.to_html());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_row_selection_is_exclusive() {
    let (mut page, log) = page_with(&[grid("g")]);

    page.dispatch(&Event::click("g_r_0"));
    page.dispatch(&Event::click("g_r_2"));

    assert_eq!(count_class(&page, "sbo-grid-row--selected"), 1);
    assert_eq!(page.selected_row("g"), Some(2));
    let row = find_element(page.root(), "g_r_2").unwrap();
    assert!(row.has_class("sbo-grid-row--selected"));

    assert_eq!(
        log.borrow().last(),
        Some(&Notification::RowSelected {
            table_id: "g".to_string(),
            row_index: 2
        })
    );
}

#[test]
fn test_click_inside_row_bubbles_to_row() {
    let (mut page, log) = page_with(&[matrix("m")]);

    // the qty input binds only input/change, so the click reaches the row
    assert_eq!(page.dispatch(&Event::click("m_1_qty")), EventResult::Consumed);
    assert_eq!(page.selected_row("m"), Some(1));

    page.dispatch(&Event::click("m_rn_3"));
    assert_eq!(page.selected_row("m"), Some(3));
    assert_eq!(count_class(&page, "sbo-matrix-row--selected"), 1);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_selection_is_per_table() {
    let (mut page, _) = page_with(&[grid("a"), grid("b")]);

    page.dispatch(&Event::click("a_r_1"));
    page.dispatch(&Event::click("b_r_0"));

    assert_eq!(page.selected_row("a"), Some(1));
    assert_eq!(page.selected_row("b"), Some(0));
}

#[test]
fn test_remount_discards_selection_and_sort() {
    let (mut page, _) = page_with(&[grid("g")]);
    page.dispatch(&Event::click("g_r_1"));
    page.dispatch(&Event::click("g_h_code"));

    let rendered = render_table(&grid("g"), &SequentialIds::new(), &Locale::tr());
    page.mount(rendered);

    assert_eq!(page.selected_row("g"), None);
    assert_eq!(page.sort_state("g", "code"), SortDirection::None);
    assert_eq!(page.root().child_elements().len(), 1);
    // bindings survive the re-mount
    assert!(page.dispatch(&Event::click("g_r_0")).is_handled());
}

#[test]
fn test_mounting_a_table_keeps_bindings_of_a_prefixed_neighbour() {
    let (mut page, _) = page_with(&[grid("orders_archive"), grid("orders")]);

    assert_eq!(page.dispatch(&Event::click("orders_archive_r_1")), EventResult::Consumed);
    assert_eq!(page.selected_row("orders_archive"), Some(1));
    assert!(page.dispatch(&Event::click("orders_archive_h_price")).is_handled());
    assert_eq!(page.sort_state("orders_archive", "price"), SortDirection::Ascending);

    assert!(page.unmount("orders"));
    assert_eq!(page.dispatch(&Event::click("orders_archive_r_2")), EventResult::Consumed);
    assert_eq!(page.selected_row("orders_archive"), Some(2));
    assert_eq!(page.dispatch(&Event::click("orders_r_0")), EventResult::Ignored);
}

// ============================================================================
// Add / delete
// ============================================================================

#[test]
fn test_delete_without_selection_warns() {
    let (mut page, log) = page_with(&[matrix("m")]);

    assert_eq!(page.dispatch(&Event::click("m_delete")), EventResult::Consumed);

    assert!(log.borrow().is_empty());
    let advisories = page.drain_advisories();
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].level, AdvisoryLevel::Warning);
    assert_eq!(advisories[0].message, "Silmek için bir satır seçiniz.");
    assert!(page.drain_advisories().is_empty());
}

#[test]
fn test_delete_with_selection_requests_delete() {
    let (mut page, log) = page_with(&[matrix("m")]);

    page.dispatch(&Event::click("m_r_2"));
    page.dispatch(&Event::click("m_delete"));

    assert_eq!(
        log.borrow().last(),
        Some(&Notification::RowDeleteRequested {
            table_id: "m".to_string(),
            row_index: 2
        })
    );
    assert!(page.drain_advisories().is_empty());
    // the core leaves the rows in place
    assert_eq!(count_class(&page, "sbo-matrix-row"), 4);
}

#[test]
fn test_add_requests_a_row() {
    let (mut page, log) = page_with(&[matrix("m")]);

    page.dispatch(&Event::click("m_add"));

    assert_eq!(
        *log.borrow(),
        vec![Notification::RowAddRequested {
            table_id: "m".to_string()
        }]
    );
    assert_eq!(count_class(&page, "sbo-matrix-row"), 4);
}

// ============================================================================
// Scrolling
// ============================================================================

#[test]
fn test_scroll_nudges_by_step() {
    let (mut page, log) = page_with(&[matrix("m")]);

    page.dispatch(&Event::click("m_down"));
    page.dispatch(&Event::click("m_down"));
    assert_eq!(page.scroll_top("m"), 60);
    page.dispatch(&Event::click("m_up"));
    assert_eq!(page.scroll_top("m"), 30);

    let container = find_element(page.root(), "m_container").unwrap();
    assert_eq!(container.get_data("scroll-top"), Some("30"));
    assert!(log.borrow().is_empty());
}

#[test]
fn test_scroll_is_clamped() {
    let (mut page, _) = page_with(&[matrix("m")]);

    page.dispatch(&Event::click("m_up"));
    assert_eq!(page.scroll_top("m"), 0);

    page.set_scroll_extent("m", 45);
    for _ in 0..5 {
        page.dispatch(&Event::click("m_down"));
    }
    assert_eq!(page.scroll_top("m"), 45);
}

#[test]
fn test_custom_scroll_step() {
    let mut page = Page::new(Locale::tr()).with_scroll_step(12);
    page.mount(render_table(&matrix("m"), &SequentialIds::new(), &Locale::tr()));
    page.dispatch(&Event::click("m_down"));
    assert_eq!(page.scroll_top("m"), 12);
}

// ============================================================================
// Cell edits
// ============================================================================

#[test]
fn test_change_writes_value_and_notifies() {
    let (mut page, log) = page_with(&[matrix("m")]);

    page.dispatch(&Event::input("m_0_qty", "1"));
    assert!(log.borrow().is_empty());

    page.dispatch(&Event::change("m_0_qty", "12"));
    let qty = find_element(page.root(), "m_0_qty").unwrap();
    assert_eq!(qty.get_attr("value"), Some("12"));
    assert_eq!(
        *log.borrow(),
        vec![Notification::CellChanged {
            table_id: "m".to_string(),
            row_index: 0,
            column_id: "qty".to_string(),
            value: "12".to_string()
        }]
    );
}

#[test]
fn test_toggle_change_sets_checked() {
    let (mut page, _) = page_with(&[matrix("m")]);

    page.dispatch(&Event::change("m_1_free", "true"));
    assert!(find_element(page.root(), "m_1_free").unwrap().has_flag("checked"));
    page.dispatch(&Event::change("m_1_free", "false"));
    assert!(!find_element(page.root(), "m_1_free").unwrap().has_flag("checked"));
}

#[test]
fn test_lookup_trigger_follows_input() {
    let (mut page, _) = page_with(&[matrix("m")]);
    let trigger =
        |page: &Page| linked_button::is_active(find_element(page.root(), "m_lk_0_item").unwrap());

    assert!(!trigger(&page));
    page.dispatch(&Event::input("m_0_item", "A"));
    assert!(trigger(&page));
    page.dispatch(&Event::input("m_0_item", "   "));
    assert!(!trigger(&page));
}

#[test]
fn test_lookup_trigger_defers_request() {
    let (mut page, log) = page_with(&[matrix("m")]);

    let EventResult::Deferred(request) = page.dispatch(&Event::click("m_lk_2_item")) else {
        panic!("expected a deferred lookup");
    };
    assert_eq!(request.action, LookupAction::ChooseFromList);
    assert_eq!(request.input_id, "m_2_item");
    assert_eq!(request.row_index, 2);
    assert_eq!(request.object_type.as_deref(), Some("4"));
    // the trigger click does not select the row
    assert_eq!(page.selected_row("m"), None);

    page.dispatch(&Event::change("m_2_item", " A00001 "));
    let EventResult::Deferred(request) = page.dispatch(&Event::click("m_lk_2_item")) else {
        panic!("expected a deferred lookup");
    };
    assert_eq!(
        request.action,
        LookupAction::OpenDetail {
            value: "A00001".to_string()
        }
    );
    assert!(matches!(
        log.borrow().last(),
        Some(Notification::LookupRequested { table_id, .. }) if table_id == "m"
    ));
}

// ============================================================================
// Missing targets
// ============================================================================

#[test]
fn test_unknown_target_is_ignored() {
    let (mut page, log) = page_with(&[grid("g")]);

    assert_eq!(page.dispatch(&Event::click("nope")), EventResult::Ignored);
    assert_eq!(page.dispatch(&Event::change("g_r_0", "x")), EventResult::Ignored);
    assert!(log.borrow().is_empty());
    assert!(page.drain_advisories().is_empty());
}

#[test]
fn test_unmounted_table_is_ignored() {
    let (mut page, log) = page_with(&[matrix("m")]);

    assert!(page.unmount("m"));
    assert!(!page.unmount("m"));
    assert_eq!(page.dispatch(&Event::click("m_delete")), EventResult::Ignored);
    assert_eq!(page.dispatch(&Event::click("m_r_0")), EventResult::Ignored);
    assert!(log.borrow().is_empty());
    assert!(page.drain_advisories().is_empty());
}

#[test]
fn test_listeners_run_in_registration_order() {
    let (mut page, _) = page_with(&[grid("g")]);
    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second"] {
        let order = order.clone();
        page.subscribe(move |_| order.borrow_mut().push(name));
    }

    page.dispatch(&Event::click("g_r_0"));
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}
