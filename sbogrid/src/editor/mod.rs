//! Layout editor session.
//!
//! While active, the editor marks every component inside its container as
//! editable. A selected component can be nudged with the arrow keys and the
//! resulting offsets saved to, loaded from or cleared in a [`LayoutStore`].
//! The session is owned by the host; nothing about it is global.

mod store;

pub use store::{JsonFileStore, LayoutStore, MemoryStore};

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use sbodom::{
    closest_with_class, find_element, find_element_mut, for_each_mut, Element, Event, Key,
};
use serde::{Deserialize, Serialize};

use crate::error::{Fault, LayoutError};
use crate::ids::{IdGenerator, SequentialIds};
use crate::notify::{Advisory, Notification};
use crate::page::Page;

/// Store key of the saved layout.
pub const LAYOUT_KEY: &str = "sbo-layout-data";

/// Classes of components the editor can move.
pub const EDITABLE_CLASSES: &[&str] = &[
    "sbo-static-text",
    "sbo-edit-text",
    "sbo-linked-button",
    "sbo-button",
    "sbo-checkbox",
    "sbo-combobox",
    "sbo-extended-edittext",
    "sbo-option-button",
    "form-row",
    "sbo-field-group",
    "sbo-input-group",
];

const ACTIVE_CLASS: &str = "sbo-edit-mode-active";
const EDITABLE_CLASS: &str = "sbo-editable";
const SELECTED_CLASS: &str = "sbo-selected";
const INDICATOR_ID: &str = "sbo-position-indicator";

/// Pixels per arrow key press, and with Shift held.
const STEP: i32 = 1;
const FAST_STEP: i32 = 10;

/// Offset of a component from where it was rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub left: i32,
    pub top: i32,
}

/// A saved layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutData {
    pub timestamp: DateTime<Utc>,
    pub positions: BTreeMap<String, Position>,
}

pub struct LayoutEditor {
    container_id: String,
    active: bool,
    selected: Option<String>,
    positions: BTreeMap<String, Position>,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for LayoutEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEditor")
            .field("container_id", &self.container_id)
            .field("active", &self.active)
            .field("selected", &self.selected)
            .field("positions", &self.positions)
            .finish_non_exhaustive()
    }
}

impl LayoutEditor {
    /// A session over the element with id `container_id`.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self::with_ids(container_id, Box::new(SequentialIds::new()))
    }

    /// Use `ids` to name components that have no id.
    pub fn with_ids(container_id: impl Into<String>, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            container_id: container_id.into(),
            active: false,
            selected: None,
            positions: BTreeMap::new(),
            ids,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Offsets moved or loaded during this session.
    pub fn positions(&self) -> &BTreeMap<String, Position> {
        &self.positions
    }

    fn container<'a>(&self, page: &'a mut Page) -> Result<&'a mut Element, Fault> {
        find_element_mut(page.root_mut(), &self.container_id)
            .ok_or_else(|| Fault::MissingTarget(self.container_id.clone()))
    }

    /// Switch edit mode. Returns whether it is now active.
    pub fn toggle(&mut self, page: &mut Page) -> bool {
        if self.active {
            self.deactivate(page);
        } else {
            self.activate(page);
        }
        self.active
    }

    pub fn activate(&mut self, page: &mut Page) {
        let ids = &self.ids;
        let container = match self.container(page) {
            Ok(container) => container,
            Err(fault) => {
                log::debug!("{}", fault);
                return;
            }
        };
        container.add_class(ACTIVE_CLASS);

        let mut marked = 0;
        for_each_mut(container, &mut |el| {
            let editable = EDITABLE_CLASSES.iter().any(|class| el.has_class(class));
            let is_button = el.id_str().is_some_and(|id| id.starts_with("btn"));
            if !editable || is_button {
                return;
            }
            if el.id.is_none() {
                el.id = Some(ids.next_id("editable"));
            }
            el.add_class(EDITABLE_CLASS);
            el.set_style("position", "relative");
            marked += 1;
        });

        self.active = true;
        log::info!("edit mode active on {} ({} components)", self.container_id, marked);
    }

    /// Leave edit mode, stripping the edit marks and inline offsets.
    pub fn deactivate(&mut self, page: &mut Page) {
        self.deselect(page);
        if let Ok(container) = self.container(page) {
            container.remove_class(ACTIVE_CLASS);
            for_each_mut(container, &mut |el| {
                if el.remove_class(EDITABLE_CLASS) {
                    el.remove_class(SELECTED_CLASS);
                    el.remove_style("position");
                    el.remove_style("left");
                    el.remove_style("top");
                }
            });
        }
        self.active = false;
        log::info!("edit mode inactive on {}", self.container_id);
    }

    /// Select an editable component. Returns false when edit mode is off or
    /// the element is not editable.
    pub fn select(&mut self, page: &mut Page, id: &str) -> bool {
        if !self.active {
            return false;
        }
        let editable = find_element(page.root(), id).is_some_and(|el| el.has_class(EDITABLE_CLASS));
        if !editable {
            return false;
        }

        self.deselect(page);
        let Some(el) = find_element_mut(page.root_mut(), id) else {
            return false;
        };
        let offset = offset_of(el);
        el.add_class(SELECTED_CLASS);

        // the indicator sits in the container so the component's own content is untouched
        if let Ok(container) = self.container(page) {
            container.push_child(
                Element::div()
                    .id(INDICATOR_ID)
                    .class("sbo-position-indicator")
                    .data("target", id)
                    .text(indicator_text(offset)),
            );
        }
        self.selected = Some(id.to_string());
        true
    }

    pub fn deselect(&mut self, page: &mut Page) {
        let Some(id) = self.selected.take() else {
            return;
        };
        if let Some(el) = find_element_mut(page.root_mut(), &id) {
            el.remove_class(SELECTED_CLASS);
        }
        if let Ok(container) = self.container(page) {
            container.remove_children_where(|child| child.id_str() == Some(INDICATOR_ID));
        }
    }

    /// Select the editable component a click landed in.
    pub fn on_click(&mut self, page: &mut Page, event: &Event) -> bool {
        let Event::Click { target } = event else {
            return false;
        };
        if !self.active {
            return false;
        }
        let Some(id) = closest_with_class(page.root(), target, EDITABLE_CLASS)
            .and_then(|el| el.id_str())
            .map(str::to_string)
        else {
            return false;
        };
        self.select(page, &id)
    }

    /// Keyboard handling while a component is selected: arrows move it,
    /// Escape deselects, Ctrl+S saves to `store`.
    pub fn on_key(&mut self, page: &mut Page, store: &mut dyn LayoutStore, event: &Event) -> bool {
        let Event::Key { key, modifiers, .. } = event else {
            return false;
        };
        if !self.active || self.selected.is_none() {
            return false;
        }

        let step = if modifiers.shift { FAST_STEP } else { STEP };
        match key {
            Key::Escape => self.deselect(page),
            Key::Char('s') | Key::Char('S') if modifiers.ctrl => {
                if let Err(e) = self.save(page, store) {
                    log::error!("failed to save layout: {}", e);
                    page.push_advisory(Advisory::error(e.to_string()));
                }
            }
            Key::Left => self.move_selected(page, -step, 0),
            Key::Right => self.move_selected(page, step, 0),
            Key::Up => self.move_selected(page, 0, -step),
            Key::Down => self.move_selected(page, 0, step),
            _ => return false,
        }
        true
    }

    /// Move the selected component by `(dx, dy)` pixels.
    pub fn move_selected(&mut self, page: &mut Page, dx: i32, dy: i32) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        let Some(el) = find_element_mut(page.root_mut(), &id) else {
            log::debug!("{}", Fault::MissingTarget(id));
            return;
        };
        let current = offset_of(el);
        let moved = Position {
            left: current.left + dx,
            top: current.top + dy,
        };
        apply_offset(el, moved);
        if let Some(indicator) = find_element_mut(page.root_mut(), INDICATOR_ID) {
            indicator.content = sbodom::Content::Text(indicator_text(moved));
        }
        self.positions.insert(id, moved);
    }

    /// Store the offset of every moved component under [`LAYOUT_KEY`].
    pub fn save(
        &mut self,
        page: &mut Page,
        store: &mut dyn LayoutStore,
    ) -> Result<LayoutData, LayoutError> {
        let mut positions = BTreeMap::new();
        if let Ok(container) = self.container(page) {
            let ids = &self.ids;
            for_each_mut(container, &mut |el| {
                let moved = el.get_style("left").is_some() || el.get_style("top").is_some();
                if el.has_class(EDITABLE_CLASS) && moved {
                    let id = el
                        .id
                        .get_or_insert_with(|| ids.next_id("editable"))
                        .clone();
                    positions.insert(id, offset_of(el));
                }
            });
        }

        let data = LayoutData {
            timestamp: Utc::now(),
            positions,
        };
        store.set(LAYOUT_KEY, serde_json::to_string(&data)?)?;

        let count = data.positions.len();
        log::info!("layout saved: {} positions", count);
        let message = page.locale().layout_saved.replace("{count}", &count.to_string());
        page.push_advisory(Advisory::success(message));
        page.notify(Notification::LayoutSaved { positions: count });
        Ok(data)
    }

    /// Re-apply a saved layout. Returns false when nothing was saved.
    pub fn load(&mut self, page: &mut Page, store: &dyn LayoutStore) -> Result<bool, LayoutError> {
        let Some(text) = store.get(LAYOUT_KEY)? else {
            log::info!("no saved layout");
            let message = page.locale().layout_missing.clone();
            page.push_advisory(Advisory::info(message));
            return Ok(false);
        };
        let data: LayoutData = serde_json::from_str(&text)?;

        for (id, position) in &data.positions {
            match find_element_mut(page.root_mut(), id) {
                Some(el) => {
                    el.set_style("position", "relative");
                    apply_offset(el, *position);
                    self.positions.insert(id.clone(), *position);
                }
                None => log::debug!("{}", Fault::MissingTarget(id.clone())),
            }
        }

        log::info!("layout loaded from {}", data.timestamp);
        let message = page.locale().layout_loaded.clone();
        page.push_advisory(Advisory::success(message));
        Ok(true)
    }

    /// Clear every offset and the saved layout.
    pub fn reset(
        &mut self,
        page: &mut Page,
        store: &mut dyn LayoutStore,
    ) -> Result<(), LayoutError> {
        if let Ok(container) = self.container(page) {
            for_each_mut(container, &mut |el| {
                if el.has_class(EDITABLE_CLASS) {
                    el.remove_style("left");
                    el.remove_style("top");
                }
            });
        }
        if let Some(indicator) = find_element_mut(page.root_mut(), INDICATOR_ID) {
            indicator.content = sbodom::Content::Text(indicator_text(Position::default()));
        }
        self.positions.clear();
        store.delete(LAYOUT_KEY)?;

        log::info!("positions reset");
        let message = page.locale().positions_reset.clone();
        page.push_advisory(Advisory::success(message));
        Ok(())
    }
}

fn parse_px(value: Option<&str>) -> i32 {
    value
        .and_then(|v| v.trim().trim_end_matches("px").parse().ok())
        .unwrap_or(0)
}

fn offset_of(el: &Element) -> Position {
    Position {
        left: parse_px(el.get_style("left")),
        top: parse_px(el.get_style("top")),
    }
}

fn apply_offset(el: &mut Element, position: Position) {
    el.set_style("left", format!("{}px", position.left));
    el.set_style("top", format!("{}px", position.top));
}

fn indicator_text(position: Position) -> String {
    format!("X: {}px, Y: {}px", position.left, position.top)
}
