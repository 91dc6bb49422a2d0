//! Grid and matrix rendering.
//!
//! Rendering is a pure function of the configuration: it builds an element
//! tree and the handler roles of its interactive parts. Nothing is retained
//! between renders.

mod cell;
mod compose;
mod config;
mod header;
mod row;

pub use cell::render_cell;
pub use compose::render_table;
pub use config::{GridOptions, MatrixOptions, TableConfig, TableMode};
pub use header::{render_header, HeaderOptions};
pub use row::{render_row, RowOptions};

use sbodom::{Element, HandlerRegistry};

use crate::locale::Locale;
use crate::role::Role;

/// Which presentation a table part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Grid,
    Matrix,
}

impl Presentation {
    /// BEM block prefix of rows, cells and headers.
    pub fn block(&self) -> &'static str {
        match self {
            Presentation::Grid => "sbo-grid",
            Presentation::Matrix => "sbo-matrix",
        }
    }

    /// Class carried by the table's outermost element.
    pub fn root_class(&self) -> &'static str {
        match self {
            Presentation::Grid => "sbo-grid",
            Presentation::Matrix => "sbo-matrix-wrapper",
        }
    }

    pub fn row_class(&self) -> String {
        format!("{}-row", self.block())
    }

    pub fn selected_row_class(&self) -> String {
        format!("{}-row--selected", self.block())
    }

    pub fn header_cell_class(&self) -> String {
        format!("{}-header-cell", self.block())
    }

    pub fn sort_icon_class(&self) -> String {
        format!("{}-sort-icon", self.block())
    }

    pub fn container_class(&self) -> String {
        format!("{}-container", self.block())
    }
}

/// Per-render state threaded through the builders.
pub struct RenderContext<'a> {
    pub table_id: &'a str,
    pub locale: &'a Locale,
    pub handlers: &'a mut HandlerRegistry<Role>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        table_id: &'a str,
        locale: &'a Locale,
        handlers: &'a mut HandlerRegistry<Role>,
    ) -> Self {
        Self {
            table_id,
            locale,
            handlers,
        }
    }
}

/// Output of [`render_table`]: the element tree plus its handler roles.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub table_id: String,
    pub presentation: Presentation,
    pub root: Element,
    pub handlers: HandlerRegistry<Role>,
}

impl Rendered {
    /// Compact markup for insertion into a document.
    pub fn to_html(&self) -> String {
        sbodom::render_to_string(&self.root)
    }
}
