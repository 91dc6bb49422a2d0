//! EditText widget - a single-line text field.

use sbodom::Element;

/// A text field builder.
///
/// # Example
///
/// ```ignore
/// let field = EditText::new("m_0_qty")
///     .value("5")
///     .max_length(10)
///     .disabled(true)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct EditText {
    id: String,
    value: String,
    width: String,
    height: String,
    disabled: bool,
    password: bool,
    max_length: Option<u32>,
    tab_index: Option<u32>,
    data_source: Option<String>,
    linked_object: Option<String>,
}

impl EditText {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            width: "120px".to_string(),
            height: "19px".to_string(),
            disabled: false,
            password: false,
            max_length: None,
            tab_index: None,
            data_source: None,
            linked_object: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
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

    pub fn password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    pub fn max_length(mut self, max_length: Option<u32>) -> Self {
        self.max_length = max_length;
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

    pub fn linked_object(mut self, linked_object: Option<String>) -> Self {
        self.linked_object = linked_object;
        self
    }

    pub fn build(self) -> Element {
        let kind = if self.password { "password" } else { "text" };
        Element::input(kind)
            .id(self.id)
            .class("sbo-edit-text")
            .class_if(self.disabled, "sbo-edit-text--disabled")
            .style("width", self.width)
            .style("height", self.height)
            .attr("value", self.value)
            .attr_opt("maxlength", self.max_length.map(|m| m.to_string()))
            .attr_opt("tabindex", self.tab_index.map(|t| t.to_string()))
            .attr_opt("data-source", self.data_source)
            .attr_opt("data-linked-object", self.linked_object)
            .disabled(self.disabled)
    }
}
