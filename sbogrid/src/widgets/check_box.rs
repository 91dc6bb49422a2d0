//! CheckBox widget - a bare toggle wrapped in its label.

use sbodom::{Element, Tag};

#[derive(Clone, Debug)]
pub struct CheckBox {
    id: String,
    checked: bool,
    disabled: bool,
    tab_index: Option<u32>,
    data_source: Option<String>,
}

impl CheckBox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            disabled: false,
            tab_index: None,
            data_source: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn tab_index(mut self, tab_index: Option<u32>) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn data_source(mut self, data_source: Option<String>) -> Self {
        self.data_source = data_source;
        self
    }

    pub fn build(self) -> Element {
        let input = Element::input("checkbox")
            .id(self.id.clone())
            .class("sbo-checkbox__input")
            .attr_opt("tabindex", self.tab_index.map(|t| t.to_string()))
            .attr_opt("data-source", self.data_source)
            .flag("checked", self.checked)
            .disabled(self.disabled);

        Element::new(Tag::Label)
            .class("sbo-checkbox")
            .class_if(self.disabled, "sbo-checkbox--disabled")
            .attr("for", self.id)
            .child(input)
    }
}
