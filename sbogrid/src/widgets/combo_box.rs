//! ComboBox widget - a drop-down selection.

use sbodom::{Element, Tag};

use crate::column::SelectOption;

#[derive(Clone, Debug)]
pub struct ComboBox {
    id: String,
    options: Vec<SelectOption>,
    selected: Option<String>,
    allow_empty: bool,
    width: String,
    height: String,
    disabled: bool,
    tab_index: Option<u32>,
    data_source: Option<String>,
}

impl ComboBox {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: None,
            allow_empty: true,
            width: "120px".to_string(),
            height: "21px".to_string(),
            disabled: false,
            tab_index: None,
            data_source: None,
        }
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Mark the option with this value selected.
    pub fn selected(mut self, value: Option<String>) -> Self {
        self.selected = value;
        self
    }

    /// Whether a leading blank option is offered.
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
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
        let blank = self
            .allow_empty
            .then(|| Element::new(Tag::Option).attr("value", ""));

        let selected = self.selected.as_deref();
        let options = self.options.iter().map(|opt| {
            Element::new(Tag::Option)
                .attr("value", opt.value.clone())
                .flag("selected", selected == Some(opt.value.as_str()))
                .text(opt.caption())
        });

        Element::new(Tag::Select)
            .id(self.id)
            .class("sbo-combobox")
            .class_if(self.disabled, "sbo-combobox--disabled")
            .style("width", self.width)
            .style("height", self.height)
            .attr_opt("tabindex", self.tab_index.map(|t| t.to_string()))
            .attr_opt("data-source", self.data_source)
            .disabled(self.disabled)
            .children(blank)
            .children(options)
    }
}
