//! Typed handler bindings for rendered elements.
//!
//! Widgets describe what an element does when an event reaches it by
//! registering a role value against the element's id. The host resolves an
//! incoming event to a role and runs its own code for it; nothing is looked
//! up by name.

use std::collections::HashMap;

use crate::element::{path_to, Element};
use crate::event::EventKind;

/// Maps `(element id, event kind)` to a handler role.
#[derive(Debug, Clone)]
pub struct HandlerRegistry<R> {
    handlers: HashMap<(String, EventKind), R>,
}

impl<R> Default for HandlerRegistry<R> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<R> HandlerRegistry<R> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a role for an element event, replacing any previous one.
    pub fn register(&mut self, element_id: impl Into<String>, event: EventKind, role: R) {
        self.handlers.insert((element_id.into(), event), role);
    }

    /// Get the role bound directly to an element event.
    pub fn get(&self, element_id: &str, event: EventKind) -> Option<&R> {
        self.handlers.get(&(element_id.to_string(), event))
    }

    /// Resolve an event by bubbling from `target` up to the root.
    ///
    /// Returns the id of the element whose binding matched along with its
    /// role. `None` when the target is not in the tree or nothing on its
    /// ancestor chain is bound.
    pub fn resolve<'a>(
        &'a self,
        root: &Element,
        target: &str,
        event: EventKind,
    ) -> Option<(String, &'a R)> {
        let path = path_to(root, target)?;
        path.iter().rev().find_map(|el| {
            let id = el.id_str()?;
            self.get(id, event).map(|role| (id.to_string(), role))
        })
    }

    /// Merge another registry into this one.
    pub fn extend(&mut self, other: HandlerRegistry<R>) {
        self.handlers.extend(other.handlers);
    }

    /// Ids of every bound element, once per binding.
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(|(id, _)| id.as_str())
    }

    /// Drop every binding whose element id satisfies `pred`.
    pub fn remove_where(&mut self, pred: impl Fn(&str) -> bool) {
        self.handlers.retain(|(id, _), _| !pred(id));
    }

    /// Clear all handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}
