use super::Content;

/// HTML element kinds produced by the widget layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Label,
    Table,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
    Input,
    Select,
    Option,
    Button,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Label => "label",
            Tag::Table => "table",
            Tag::Thead => "thead",
            Tag::Tbody => "tbody",
            Tag::Tr => "tr",
            Tag::Th => "th",
            Tag::Td => "td",
            Tag::Input => "input",
            Tag::Select => "select",
            Tag::Option => "option",
            Tag::Button => "button",
        }
    }

    /// Void elements have no closing tag and never carry content.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::Input)
    }
}

/// A node in the markup tree.
///
/// Elements are built with chained setters and later mutated in place by
/// interaction handlers (class toggling, attribute updates). Attribute and
/// style order is preserved so serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    /// Boolean attributes such as `disabled` or `checked`.
    pub flags: Vec<String>,
    /// Inline style declarations.
    pub style: Vec<(String, String)>,
    pub content: Content,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            flags: Vec::new(),
            style: Vec::new(),
            content: Content::None,
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    pub fn button() -> Self {
        Self::new(Tag::Button).attr("type", "button")
    }

    pub fn input(kind: &str) -> Self {
        Self::new(Tag::Input).attr("type", kind)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id_str(&self) -> Option<&str> {
        self.id.as_deref()
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Add `class` only when `cond` holds.
    pub fn class_if(self, cond: bool, class: impl Into<String>) -> Self {
        if cond { self.class(class) } else { self }
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        before != self.classes.len()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Remove every class starting with `prefix`.
    pub fn remove_classes_with_prefix(&mut self, prefix: &str) {
        self.classes.retain(|c| !c.starts_with(prefix));
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(pos).1)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Shorthand for a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.get_attr(&format!("data-{key}"))
    }

    // Flags
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        self.set_flag(name, on);
        self
    }

    pub fn set_flag(&mut self, name: impl Into<String>, on: bool) {
        let name = name.into();
        let present = self.flags.contains(&name);
        if on && !present {
            self.flags.push(name);
        } else if !on && present {
            self.flags.retain(|f| *f != name);
        }
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.iter().any(|f| f == name)
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.flag("disabled", disabled)
    }

    pub fn is_disabled(&self) -> bool {
        self.has_flag("disabled")
    }

    // Inline style
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| *p == property) {
            Some((_, v)) => *v = value,
            None => self.style.push((property, value)),
        }
    }

    pub fn remove_style(&mut self, property: &str) {
        self.style.retain(|(p, _)| p != property);
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Remove direct children matching `pred`. Returns how many were removed.
    pub fn remove_children_where(&mut self, pred: impl Fn(&Element) -> bool) -> usize {
        match &mut self.content {
            Content::Children(children) => {
                let before = children.len();
                children.retain(|c| !pred(c));
                before - children.len()
            }
            _ => 0,
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Text content if this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
