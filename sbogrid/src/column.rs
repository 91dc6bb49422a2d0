//! Column descriptors: one logical field of a table.

use serde::{Deserialize, Serialize};

/// Which cell widget a column produces.
///
/// Tags are kebab-case; the legacy widget names are accepted too. Any other
/// tag is kept verbatim in [`ColumnType::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    /// Single-line text entry.
    #[default]
    TextInput,
    /// Drop-down populated from the column's value list.
    SingleSelect,
    /// Checkbox without a caption.
    BooleanToggle,
    /// Text entry paired with a lookup trigger.
    LookupPair,
    /// Fixed placeholder with no control.
    StaticLabel,
    /// Any other tag. Rendered as a text input.
    Unrecognized(String),
}

impl From<String> for ColumnType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text-input" | "edittext" | "EditText" => ColumnType::TextInput,
            "single-select" | "combobox" | "ComboBox" => ColumnType::SingleSelect,
            "boolean-toggle" | "checkbox" | "CheckBox" => ColumnType::BooleanToggle,
            "lookup-pair" | "LinkedButton" => ColumnType::LookupPair,
            "static-label" | "static" => ColumnType::StaticLabel,
            _ => ColumnType::Unrecognized(tag),
        }
    }
}

impl From<ColumnType> for String {
    fn from(kind: ColumnType) -> Self {
        match kind {
            ColumnType::Unrecognized(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

/// Semantic value kind of a grid column; governs formatting and alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataType {
    Number,
    Currency,
    Date,
    Boolean,
    Percentage,
    /// Plain text; also any unknown tag.
    #[default]
    #[serde(other)]
    String,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Number => "number",
            DataType::Currency => "currency",
            DataType::Date => "date",
            DataType::Boolean => "boolean",
            DataType::Percentage => "percentage",
        }
    }
}

impl ColumnType {
    /// The canonical tag, or the declared one for an unrecognized type.
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::Unrecognized(tag) => tag,
            ColumnType::TextInput => "text-input",
            ColumnType::SingleSelect => "single-select",
            ColumnType::BooleanToggle => "boolean-toggle",
            ColumnType::LookupPair => "lookup-pair",
            ColumnType::StaticLabel => "static-label",
        }
    }
}

/// One entry of a single-select column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default, alias = "description")]
    pub text: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: Some(text.into()),
        }
    }

    /// Caption shown to the user, falling back to the value.
    pub fn caption(&self) -> &str {
        self.text.as_deref().unwrap_or(&self.value)
    }
}

fn default_true() -> bool {
    true
}

/// Describes one column of a grid or matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Unique within a table.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: ColumnType,
    /// Layout hint such as `80px` or `20%`.
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub editable: bool,
    #[serde(default, alias = "validValues")]
    pub values: Vec<SelectOption>,
    #[serde(default = "default_true")]
    pub allow_empty: bool,
    /// Object type code for lookup-pair columns.
    #[serde(default)]
    pub linked_object: Option<String>,
    #[serde(default)]
    pub max_length: Option<u32>,
    #[serde(default)]
    pub tab_order: u32,
    #[serde(default)]
    pub data_source: Option<String>,
    /// Mask the text of text-input cells.
    #[serde(default)]
    pub is_password: bool,
}

impl ColumnDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: ColumnType::default(),
            width: None,
            data_type: DataType::default(),
            visible: true,
            editable: true,
            values: Vec::new(),
            allow_empty: true,
            linked_object: None,
            max_length: None,
            tab_order: 0,
            data_source: None,
            is_password: false,
        }
    }

    pub fn kind(mut self, kind: ColumnType) -> Self {
        self.kind = kind;
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = SelectOption>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn linked_object(mut self, object_type: impl Into<String>) -> Self {
        self.linked_object = Some(object_type.into());
        self
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn tab_order(mut self, tab_order: u32) -> Self {
        self.tab_order = tab_order;
        self
    }

    pub fn data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = Some(data_source.into());
        self
    }

    pub fn is_password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    /// Width for the inline style, `auto` when unset.
    pub fn width_or_auto(&self) -> &str {
        self.width.as_deref().unwrap_or("auto")
    }
}

/// Only the columns that produce header and data cells.
pub fn visible_columns(columns: &[ColumnDescriptor]) -> impl Iterator<Item = &ColumnDescriptor> {
    columns.iter().filter(|c| c.visible)
}
