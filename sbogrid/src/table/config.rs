//! Table configuration supplied by the embedding application.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::ColumnDescriptor;
use crate::error::ConfigError;
use crate::value::RowData;

fn default_true() -> bool {
    true
}

fn default_width() -> String {
    "100%".to_string()
}

fn default_height() -> String {
    "300px".to_string()
}

fn default_row_count() -> usize {
    10
}

/// Read-oriented presentation: a materialized row list with sorting and a
/// record-count footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    #[serde(default = "default_width")]
    pub width: String,
    #[serde(default = "default_height")]
    pub height: String,
    #[serde(default, alias = "data")]
    pub rows: Vec<RowData>,
    #[serde(default = "default_true")]
    pub allow_sorting: bool,
    #[serde(default = "default_true")]
    pub allow_selection: bool,
    #[serde(default = "default_true")]
    pub show_row_numbers: bool,
    #[serde(default = "default_true")]
    pub show_grid_lines: bool,
    #[serde(default = "default_true")]
    pub alternate_row_color: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub data_table: Option<String>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            rows: Vec::new(),
            allow_sorting: true,
            allow_selection: true,
            show_row_numbers: true,
            show_grid_lines: true,
            alternate_row_color: true,
            disabled: false,
            data_table: None,
        }
    }
}

impl GridOptions {
    pub fn new(rows: Vec<RowData>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn allow_sorting(mut self, allow: bool) -> Self {
        self.allow_sorting = allow;
        self
    }

    pub fn allow_selection(mut self, allow: bool) -> Self {
        self.allow_selection = allow;
        self
    }

    pub fn show_row_numbers(mut self, show: bool) -> Self {
        self.show_row_numbers = show;
        self
    }

    pub fn show_grid_lines(mut self, show: bool) -> Self {
        self.show_grid_lines = show;
        self
    }

    pub fn alternate_row_color(mut self, alternate: bool) -> Self {
        self.alternate_row_color = alternate;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn data_table(mut self, data_table: impl Into<String>) -> Self {
        self.data_table = Some(data_table.into());
        self
    }
}

/// Write-oriented presentation: a fixed number of rows of editable cell
/// widgets with add/delete and scroll affordances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixOptions {
    #[serde(default = "default_width")]
    pub width: String,
    #[serde(default = "default_height")]
    pub height: String,
    #[serde(default = "default_row_count")]
    pub row_count: usize,
    /// Prefill for row `i`; rows past the end render empty.
    #[serde(default)]
    pub values: Vec<RowData>,
    #[serde(default = "default_true")]
    pub show_row_numbers: bool,
    #[serde(default = "default_true")]
    pub allow_add_row: bool,
    #[serde(default = "default_true")]
    pub allow_delete_row: bool,
    #[serde(default = "default_true")]
    pub allow_row_selection: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub data_table: Option<String>,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            row_count: default_row_count(),
            values: Vec::new(),
            show_row_numbers: true,
            allow_add_row: true,
            allow_delete_row: true,
            allow_row_selection: true,
            disabled: false,
            data_table: None,
        }
    }
}

impl MatrixOptions {
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            ..Default::default()
        }
    }

    pub fn size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn values(mut self, values: Vec<RowData>) -> Self {
        self.values = values;
        self
    }

    pub fn show_row_numbers(mut self, show: bool) -> Self {
        self.show_row_numbers = show;
        self
    }

    pub fn allow_add_row(mut self, allow: bool) -> Self {
        self.allow_add_row = allow;
        self
    }

    pub fn allow_delete_row(mut self, allow: bool) -> Self {
        self.allow_delete_row = allow;
        self
    }

    pub fn allow_row_selection(mut self, allow: bool) -> Self {
        self.allow_row_selection = allow;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn data_table(mut self, data_table: impl Into<String>) -> Self {
        self.data_table = Some(data_table.into());
        self
    }
}

/// Presentation mode and its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TableMode {
    Grid(GridOptions),
    Matrix(MatrixOptions),
}

/// Everything needed to render one table instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Explicit instance id. Generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Ordered left to right.
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    #[serde(flatten)]
    pub mode: TableMode,
}

impl TableConfig {
    pub fn grid(options: GridOptions) -> Self {
        Self {
            id: None,
            columns: Vec::new(),
            mode: TableMode::Grid(options),
        }
    }

    pub fn matrix(options: MatrixOptions) -> Self {
        Self {
            id: None,
            columns: Vec::new(),
            mode: TableMode::Matrix(options),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnDescriptor>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&text)?;
        log::debug!(
            "loaded table config from {}: {} columns",
            path.as_ref().display(),
            config.columns.len()
        );
        Ok(config)
    }
}
