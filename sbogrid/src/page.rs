//! Interaction controller.
//!
//! A [`Page`] owns the element tree of one or more mounted tables together
//! with their handler roles. Incoming events are resolved to a [`Role`] by
//! bubbling from the target element, and the role's behavior mutates
//! classes and attributes on the tree and emits notifications. Sort and
//! selection state live only on the tree: mounting a fresh render of a
//! table discards them.

use std::collections::{HashMap, HashSet};

use sbodom::{
    collect_by_class, find_element, find_element_mut, for_each_mut, Element, Event, EventKind,
    HandlerRegistry, ScrollState, Tag,
};

use crate::error::Fault;
use crate::ids::{container_id, header_cell_id, row_id};
use crate::locale::Locale;
use crate::lookup::{LookupAction, LookupError, LookupProvider, LookupRequest};
use crate::notify::{Advisory, Notification, Notifier};
use crate::role::{Role, ScrollDirection};
use crate::settings::Settings;
use crate::sort::SortDirection;
use crate::table::{Presentation, Rendered};
use crate::widgets::linked_button;

/// Id of the page's own root element.
pub const PAGE_ROOT_ID: &str = "sbo-page";

/// Outcome of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing bound to the target, or the target is gone.
    Ignored,
    /// A role handled the event.
    Consumed,
    /// A lookup trigger fired; the host should run the request through a
    /// [`LookupProvider`], for example with [`Page::run_lookup`].
    Deferred(LookupRequest),
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Mounted tables and their interaction state.
#[derive(Debug)]
pub struct Page {
    root: Element,
    handlers: HandlerRegistry<Role>,
    /// Element ids each mounted table registered handlers for.
    bindings: HashMap<String, HashSet<String>>,
    scroll: ScrollState,
    notifier: Notifier,
    advisories: Vec<Advisory>,
    locale: Locale,
    scroll_step: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Page {
    pub fn new(locale: Locale) -> Self {
        Self {
            root: Element::div().id(PAGE_ROOT_ID).class("sbo-page"),
            handlers: HandlerRegistry::new(),
            bindings: HashMap::new(),
            scroll: ScrollState::new(),
            notifier: Notifier::new(),
            advisories: Vec::new(),
            locale,
            scroll_step: Settings::DEFAULT_SCROLL_STEP,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.locale()).with_scroll_step(settings.scroll_step)
    }

    /// Pixels moved by one matrix scroll nudge.
    pub fn with_scroll_step(mut self, step: u32) -> Self {
        self.scroll_step = step;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn to_html(&self) -> String {
        sbodom::render_to_string(&self.root)
    }

    /// Register a notification listener. Listeners run in registration
    /// order.
    pub fn subscribe(&mut self, listener: impl FnMut(&Notification) + 'static) {
        self.notifier.subscribe(listener);
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notifier.emit(notification);
    }

    pub(crate) fn push_advisory(&mut self, advisory: Advisory) {
        log::debug!("advisory {:?}: {}", advisory.level, advisory.message);
        self.advisories.push(advisory);
    }

    /// Take every advisory queued since the last call.
    pub fn drain_advisories(&mut self) -> Vec<Advisory> {
        std::mem::take(&mut self.advisories)
    }

    /// Insert a rendered table, replacing an earlier render with the same
    /// id along with its bindings and scroll offset.
    pub fn mount(&mut self, rendered: Rendered) {
        let Rendered {
            table_id,
            root,
            handlers,
            ..
        } = rendered;

        self.forget_bindings(&table_id);
        self.scroll.remove(&container_id(&table_id));

        let existing = self
            .root
            .child_elements_mut()
            .iter_mut()
            .find(|el| el.id_str() == Some(table_id.as_str()));
        match existing {
            Some(slot) => {
                log::debug!("re-mounting table {}", table_id);
                *slot = root;
            }
            None => {
                log::debug!("mounting table {}", table_id);
                self.root.push_child(root);
            }
        }
        let bound = handlers.element_ids().map(str::to_string).collect();
        self.bindings.insert(table_id, bound);
        self.handlers.extend(handlers);
    }

    /// Remove a mounted table. Returns false when it was not mounted.
    pub fn unmount(&mut self, table_id: &str) -> bool {
        let removed = self
            .root
            .remove_children_where(|el| el.id_str() == Some(table_id));
        self.forget_bindings(table_id);
        self.scroll.remove(&container_id(table_id));
        removed > 0
    }

    fn forget_bindings(&mut self, table_id: &str) {
        if let Some(bound) = self.bindings.remove(table_id) {
            self.handlers.remove_where(|id| bound.contains(id));
        }
    }

    /// Report the scrollable range of a matrix body, in pixels.
    pub fn set_scroll_extent(&mut self, table_id: &str, max_top: u32) {
        self.scroll.set_extent(&container_id(table_id), 0, max_top);
    }

    /// Current vertical scroll offset of a matrix body.
    pub fn scroll_top(&self, table_id: &str) -> u32 {
        self.scroll.get(&container_id(table_id)).y
    }

    /// Sort state of a header cell as currently shown.
    pub fn sort_state(&self, table_id: &str, column_id: &str) -> SortDirection {
        let header = find_element(&self.root, &header_cell_id(table_id, column_id));
        SortDirection::from_attr(header.and_then(|h| h.get_data("sort")))
    }

    /// Index of the selected row of a table, if any.
    pub fn selected_row(&self, table_id: &str) -> Option<usize> {
        let table = find_element(&self.root, table_id)?;
        let class = presentation_of(table)?.selected_row_class();
        collect_by_class(table, &class)
            .first()
            .and_then(|row| row.get_data("row-index"))
            .and_then(|index| index.parse().ok())
    }

    /// Route an event to the role bound on the target or its nearest bound
    /// ancestor.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };

        let Some((bound_id, role)) = self
            .handlers
            .resolve(&self.root, target, event.kind())
            .map(|(id, role)| (id, role.clone()))
        else {
            if find_element(&self.root, target).is_none() {
                log::debug!("{}", Fault::MissingTarget(target.to_string()));
            }
            return EventResult::Ignored;
        };

        match self.run(&bound_id, role, event) {
            Ok(result) => result,
            Err(fault @ Fault::InvalidSelection(_)) => {
                log::warn!("{}", fault);
                let message = self.locale.select_row_to_delete.clone();
                self.push_advisory(Advisory::warning(message));
                EventResult::Consumed
            }
            Err(fault) => {
                log::debug!("{}", fault);
                EventResult::Ignored
            }
        }
    }

    fn run(&mut self, bound_id: &str, role: Role, event: &Event) -> Result<EventResult, Fault> {
        match role {
            Role::Sort {
                table_id,
                column_id,
            } => {
                let direction = self.cycle_sort(&table_id, &column_id)?;
                self.notify(Notification::SortChanged {
                    table_id,
                    column_id,
                    direction,
                });
            }
            Role::SelectRow {
                table_id,
                row_index,
            } => {
                self.select_row(&table_id, row_index)?;
                self.notify(Notification::RowSelected {
                    table_id,
                    row_index,
                });
            }
            Role::AddRow { table_id } => {
                self.table(&table_id)?;
                log::info!("add row requested on {}", table_id);
                self.notify(Notification::RowAddRequested { table_id });
            }
            Role::DeleteRow { table_id } => {
                self.table(&table_id)?;
                let row_index = self
                    .selected_row(&table_id)
                    .ok_or_else(|| Fault::InvalidSelection(table_id.clone()))?;
                log::info!("delete row {} requested on {}", row_index, table_id);
                self.notify(Notification::RowDeleteRequested {
                    table_id,
                    row_index,
                });
            }
            Role::Scroll {
                table_id,
                direction,
            } => {
                self.scroll_nudge(&table_id, direction)?;
            }
            Role::EditCell {
                table_id,
                row_index,
                column_id,
                trigger,
            } => {
                let value = event.value().unwrap_or_default().to_string();
                self.write_value(bound_id, &value)?;
                if let Some(trigger) = &trigger {
                    self.sync_trigger(trigger, &value)?;
                }
                if event.kind() == EventKind::Change {
                    self.notify(Notification::CellChanged {
                        table_id,
                        row_index,
                        column_id,
                        value,
                    });
                }
            }
            Role::LookupTrigger {
                table_id,
                row_index,
                column_id,
                input_id,
                object_type,
            } => {
                let input = find_element(&self.root, &input_id)
                    .ok_or_else(|| Fault::MissingTarget(input_id.clone()))?;
                let value = input.get_attr("value").unwrap_or_default().to_string();
                let request = LookupRequest::for_value(
                    table_id.clone(),
                    input_id,
                    row_index,
                    column_id,
                    object_type,
                    &value,
                );
                self.notify(Notification::LookupRequested {
                    table_id,
                    request: request.clone(),
                });
                return Ok(EventResult::Deferred(request));
            }
        }
        Ok(EventResult::Consumed)
    }

    fn table(&self, table_id: &str) -> Result<&Element, Fault> {
        find_element(&self.root, table_id).ok_or_else(|| Fault::MissingTarget(table_id.to_string()))
    }

    fn table_mut(&mut self, table_id: &str) -> Result<&mut Element, Fault> {
        find_element_mut(&mut self.root, table_id)
            .ok_or_else(|| Fault::MissingTarget(table_id.to_string()))
    }

    /// Advance one header cell's sort cycle and reset every other header
    /// cell of the table.
    fn cycle_sort(&mut self, table_id: &str, column_id: &str) -> Result<SortDirection, Fault> {
        let header_id = header_cell_id(table_id, column_id);
        let table = self.table_mut(table_id)?;
        let presentation =
            presentation_of(table).ok_or_else(|| Fault::MissingTarget(table_id.to_string()))?;
        let current = find_element(table, &header_id)
            .map(|header| SortDirection::from_attr(header.get_data("sort")))
            .ok_or_else(|| Fault::MissingTarget(header_id.clone()))?;
        let next = current.next();

        let cell_class = presentation.header_cell_class();
        let icon_class = presentation.sort_icon_class();
        let icon_modifier = format!("{icon_class}--");
        for_each_mut(table, &mut |el| {
            if el.has_class(&cell_class) {
                el.remove_attr("data-sort");
            } else if el.has_class(&icon_class) {
                el.remove_classes_with_prefix(&icon_modifier);
            }
        });

        if let Some(header) = find_element_mut(table, &header_id) {
            header.set_attr("data-sort", next.as_str());
            for_each_mut(header, &mut |el| {
                if el.has_class(&icon_class) {
                    el.add_class(format!("{icon_modifier}{}", next.as_str()));
                }
            });
        }
        Ok(next)
    }

    /// Mark one row selected, clearing every other row of the same table.
    fn select_row(&mut self, table_id: &str, row_index: usize) -> Result<(), Fault> {
        let id = row_id(table_id, row_index);
        let table = self.table_mut(table_id)?;
        let presentation =
            presentation_of(table).ok_or_else(|| Fault::MissingTarget(table_id.to_string()))?;
        if find_element(table, &id).is_none() {
            return Err(Fault::MissingTarget(id));
        }

        let row_class = presentation.row_class();
        let selected = presentation.selected_row_class();
        for_each_mut(table, &mut |el| {
            if el.has_class(&row_class) {
                if el.id_str() == Some(id.as_str()) {
                    el.add_class(selected.clone());
                } else {
                    el.remove_class(&selected);
                }
            }
        });
        Ok(())
    }

    fn scroll_nudge(&mut self, table_id: &str, direction: ScrollDirection) -> Result<(), Fault> {
        let container = container_id(table_id);
        self.table(table_id)?;
        let step = self.scroll_step as i32;
        let dy = match direction {
            ScrollDirection::Up => -step,
            ScrollDirection::Down => step,
        };
        if self.scroll.scroll_by(&container, 0, dy) {
            let top = self.scroll.get(&container).y;
            let el = find_element_mut(&mut self.root, &container)
                .ok_or_else(|| Fault::MissingTarget(container.clone()))?;
            el.set_attr("data-scroll-top", top.to_string());
            log::debug!("scrolled {} to {}", container, top);
        }
        Ok(())
    }

    /// Write a value into a cell control the way the control holds it.
    fn write_value(&mut self, control_id: &str, value: &str) -> Result<(), Fault> {
        let control = find_element_mut(&mut self.root, control_id)
            .ok_or_else(|| Fault::MissingTarget(control_id.to_string()))?;
        match control.tag {
            Tag::Select => {
                for option in control.child_elements_mut() {
                    let selected = option.get_attr("value") == Some(value);
                    option.set_flag("selected", selected);
                }
            }
            Tag::Input if control.get_attr("type") == Some("checkbox") => {
                let checked = matches!(value, "true" | "on" | "1" | "Y");
                control.set_flag("checked", checked);
            }
            _ => control.set_attr("value", value),
        }
        Ok(())
    }

    fn is_read_only(&self, control_id: &str) -> bool {
        find_element(&self.root, control_id).is_some_and(Element::is_disabled)
    }

    /// Reflect the emptiness of a lookup input on its trigger.
    fn sync_trigger(&mut self, trigger_id: &str, value: &str) -> Result<(), Fault> {
        let trigger = find_element_mut(&mut self.root, trigger_id)
            .ok_or_else(|| Fault::MissingTarget(trigger_id.to_string()))?;
        linked_button::set_active(trigger, !value.trim().is_empty());
        Ok(())
    }

    /// Run a deferred lookup and apply its outcome.
    ///
    /// A value chosen from the list is written into the input, the trigger
    /// is re-synced and `cell-changed` is emitted. Returns the chosen value.
    pub async fn run_lookup(
        &mut self,
        provider: &dyn LookupProvider,
        request: &LookupRequest,
    ) -> Result<Option<String>, LookupError> {
        let object_type = request.object_type.as_deref();
        match &request.action {
            LookupAction::OpenDetail { value } => {
                provider.open_detail(object_type, value).await?;
                Ok(None)
            }
            LookupAction::ChooseFromList => {
                if self.is_read_only(&request.input_id) {
                    log::debug!("{} is read-only, not choosing a value", request.input_id);
                    return Ok(None);
                }
                let chosen = provider.choose(object_type).await?;
                if let Some(value) = &chosen {
                    self.complete_lookup(request, value);
                }
                Ok(chosen)
            }
        }
    }

    /// Apply a value picked for `request`. Returns false when the input is
    /// no longer on the page or does not accept edits.
    pub fn complete_lookup(&mut self, request: &LookupRequest, value: &str) -> bool {
        if self.is_read_only(&request.input_id) {
            log::debug!("{} is read-only, lookup value dropped", request.input_id);
            return false;
        }
        if let Err(fault) = self.write_value(&request.input_id, value) {
            log::debug!("{}", fault);
            return false;
        }
        let trigger =
            crate::ids::trigger_id(&request.table_id, request.row_index, &request.column_id);
        if let Err(fault) = self.sync_trigger(&trigger, value) {
            log::debug!("{}", fault);
        }
        self.notify(Notification::CellChanged {
            table_id: request.table_id.clone(),
            row_index: request.row_index,
            column_id: request.column_id.clone(),
            value: value.to_string(),
        });
        true
    }
}

/// Presentation of a mounted table element, read from its markup.
fn presentation_of(table: &Element) -> Option<Presentation> {
    match table.get_data("table-instance")? {
        "grid" => Some(Presentation::Grid),
        "matrix" => Some(Presentation::Matrix),
        _ => None,
    }
}
