use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use sbodom::{find_element, Event};
use sbogrid::widgets::linked_button;
use sbogrid::{
    render_table, ColumnDescriptor, ColumnType, EventResult, Locale, LookupError, LookupProvider,
    LookupRequest, MatrixOptions, Notification, Page, SequentialIds, SimulatedLookup, TableConfig,
};

type Log = Rc<RefCell<Vec<Notification>>>;

fn lookup_page(object_type: Option<&str>) -> (Page, Log) {
    let mut column = ColumnDescriptor::new("partner", "Partner").kind(ColumnType::LookupPair);
    column.linked_object = object_type.map(str::to_string);
    page_with(column)
}

fn page_with(column: ColumnDescriptor) -> (Page, Log) {
    let config = TableConfig::matrix(MatrixOptions::new(2))
        .id("m")
        .columns([column]);

    let mut page = Page::new(Locale::tr());
    page.mount(render_table(&config, &SequentialIds::new(), &Locale::tr()));
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    page.subscribe(move |n| sink.borrow_mut().push(n.clone()));
    (page, log)
}

fn trigger(page: &mut Page, id: &str) -> LookupRequest {
    match page.dispatch(&Event::click(id)) {
        EventResult::Deferred(request) => request,
        other => panic!("expected a deferred lookup, got {other:?}"),
    }
}

fn input_value(page: &Page, id: &str) -> String {
    find_element(page.root(), id)
        .and_then(|el| el.get_attr("value"))
        .unwrap_or_default()
        .to_string()
}

fn fast() -> SimulatedLookup {
    SimulatedLookup::with_delay(Duration::from_millis(1))
}

#[tokio::test]
async fn test_choose_business_partner() {
    let (mut page, log) = lookup_page(Some("2"));
    let request = trigger(&mut page, "m_lk_0_partner");

    let chosen = page.run_lookup(&SimulatedLookup::new(), &request).await.unwrap();

    assert_eq!(chosen.as_deref(), Some("C20000"));
    assert_eq!(input_value(&page, "m_0_partner"), "C20000");
    let button = find_element(page.root(), "m_lk_0_partner").unwrap();
    assert!(linked_button::is_active(button));
    assert_eq!(
        log.borrow().last(),
        Some(&Notification::CellChanged {
            table_id: "m".to_string(),
            row_index: 0,
            column_id: "partner".to_string(),
            value: "C20000".to_string()
        })
    );
}

#[tokio::test]
async fn test_choose_item() {
    let (mut page, _) = lookup_page(Some("4"));
    let request = trigger(&mut page, "m_lk_1_partner");

    page.run_lookup(&fast(), &request).await.unwrap();

    assert_eq!(input_value(&page, "m_1_partner"), "A00001");
    assert_eq!(input_value(&page, "m_0_partner"), "");
}

#[tokio::test]
async fn test_unknown_object_type_chooses_nothing() {
    let (mut page, log) = lookup_page(Some("17"));
    let request = trigger(&mut page, "m_lk_0_partner");
    let before = log.borrow().len();

    let chosen = page.run_lookup(&fast(), &request).await.unwrap();

    assert_eq!(chosen, None);
    assert_eq!(input_value(&page, "m_0_partner"), "");
    assert_eq!(log.borrow().len(), before);
}

#[tokio::test]
async fn test_open_detail_leaves_value() {
    let (mut page, log) = lookup_page(Some("2"));
    page.dispatch(&Event::change("m_0_partner", "C10000"));
    let request = trigger(&mut page, "m_lk_0_partner");
    let before = log.borrow().len();

    let chosen = page.run_lookup(&fast(), &request).await.unwrap();

    assert_eq!(chosen, None);
    assert_eq!(input_value(&page, "m_0_partner"), "C10000");
    assert_eq!(log.borrow().len(), before);
}

struct Unavailable;

#[async_trait]
impl LookupProvider for Unavailable {
    async fn choose(&self, _object_type: Option<&str>) -> Result<Option<String>, LookupError> {
        Err(LookupError::Unavailable("offline".to_string()))
    }

    async fn open_detail(
        &self,
        _object_type: Option<&str>,
        _value: &str,
    ) -> Result<(), LookupError> {
        Err(LookupError::Cancelled)
    }
}

#[tokio::test]
async fn test_provider_errors_propagate() {
    let (mut page, log) = lookup_page(Some("2"));
    let request = trigger(&mut page, "m_lk_0_partner");
    let before = log.borrow().len();

    let result = page.run_lookup(&Unavailable, &request).await;

    assert_eq!(result, Err(LookupError::Unavailable("offline".to_string())));
    assert_eq!(input_value(&page, "m_0_partner"), "");
    assert_eq!(log.borrow().len(), before);
}

#[tokio::test]
async fn test_lookup_after_unmount_is_dropped() {
    let (mut page, log) = lookup_page(Some("2"));
    let request = trigger(&mut page, "m_lk_0_partner");
    page.unmount("m");
    let before = log.borrow().len();

    let chosen = page.run_lookup(&fast(), &request).await.unwrap();

    assert_eq!(chosen.as_deref(), Some("C20000"));
    assert_eq!(log.borrow().len(), before);
    assert!(!page.complete_lookup(&request, "C20000"));
}

#[tokio::test]
async fn test_read_only_lookup_refuses_a_chosen_value() {
    let column = ColumnDescriptor::new("partner", "Partner")
        .kind(ColumnType::LookupPair)
        .editable(false)
        .linked_object("2");
    let (mut page, log) = page_with(column);
    let request = trigger(&mut page, "m_lk_0_partner");
    let before = log.borrow().len();

    let chosen = page.run_lookup(&fast(), &request).await.unwrap();

    assert_eq!(chosen, None);
    assert_eq!(input_value(&page, "m_0_partner"), "");
    assert_eq!(log.borrow().len(), before);
    assert!(!page.complete_lookup(&request, "C20000"));
    assert_eq!(input_value(&page, "m_0_partner"), "");
    assert_eq!(log.borrow().len(), before);
}
