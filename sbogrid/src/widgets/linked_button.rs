//! LinkedButton widget - the arrow trigger of a lookup pair.
//!
//! The trigger is active while its linked input holds a value. Activity is
//! exposed through the `sbo-linked-button--disabled` class and a
//! `data-state` attribute; the trigger stays clickable either way so an
//! empty input can still open the selection dialog.

use sbodom::Element;

const INACTIVE_CLASS: &str = "sbo-linked-button--disabled";

#[derive(Clone, Debug)]
pub struct LinkedButton {
    id: String,
    link_to: String,
    linked_object: Option<String>,
    active: bool,
    title: Option<String>,
}

impl LinkedButton {
    /// A trigger for the input with id `link_to`.
    pub fn new(id: impl Into<String>, link_to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link_to: link_to.into(),
            linked_object: None,
            active: false,
            title: None,
        }
    }

    pub fn linked_object(mut self, linked_object: Option<String>) -> Self {
        self.linked_object = linked_object;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> Element {
        let mut button = Element::button()
            .id(self.id)
            .class("sbo-linked-button")
            .attr("data-link-to", self.link_to)
            .attr_opt("data-linked-object", self.linked_object)
            .attr("data-auto-activate", "true")
            .attr_opt("title", self.title)
            .child(Element::span().class("sbo-linked-button__arrow"));
        set_active(&mut button, self.active);
        button
    }
}

/// Reflect whether the linked input currently holds a value.
pub fn set_active(button: &mut Element, active: bool) {
    if active {
        button.remove_class(INACTIVE_CLASS);
    } else {
        button.add_class(INACTIVE_CLASS);
    }
    button.set_attr("data-state", if active { "active" } else { "inactive" });
}

pub fn is_active(button: &Element) -> bool {
    button.get_attr("data-state") == Some("active")
}
