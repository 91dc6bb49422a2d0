//! Header builder.

use sbodom::{Element, EventKind, Tag};

use crate::column::{visible_columns, ColumnDescriptor};
use crate::ids::header_cell_id;
use crate::role::Role;

use super::{Presentation, RenderContext};

/// Header options.
#[derive(Debug, Clone, Copy)]
pub struct HeaderOptions {
    pub presentation: Presentation,
    pub show_row_numbers: bool,
    /// Attach the sort affordance and bind header clicks.
    pub sortable: bool,
}

/// Render the header row: an optional `#` cell, then one cell per visible
/// column tagged with its id, type and data type.
pub fn render_header(
    cx: &mut RenderContext<'_>,
    columns: &[ColumnDescriptor],
    options: &HeaderOptions,
) -> Element {
    let block = options.presentation.block();
    let cell_class = options.presentation.header_cell_class();

    let row_number = options.show_row_numbers.then(|| {
        Element::new(Tag::Th)
            .class(cell_class.clone())
            .class(format!("{cell_class}--row-number"))
            .child(
                Element::div()
                    .class(format!("{block}-header-content"))
                    .child(
                        Element::span()
                            .class(format!("{block}-row-number-icon"))
                            .text("#"),
                    ),
            )
    });

    let mut cells = Vec::new();
    for column in visible_columns(columns) {
        let id = header_cell_id(cx.table_id, &column.id);

        let sort_icon = options
            .sortable
            .then(|| Element::span().class(options.presentation.sort_icon_class()));

        let cell = Element::new(Tag::Th)
            .id(&id)
            .class(cell_class.clone())
            .class_if(options.sortable, format!("{cell_class}--sortable"))
            .style("width", column.width_or_auto())
            .data("column-id", &column.id)
            .data("column-type", column.kind.as_str())
            .data("data-type", column.data_type.as_str())
            .child(
                Element::div()
                    .class(format!("{block}-header-content"))
                    .child(
                        Element::span()
                            .class(format!("{block}-header-text"))
                            .text(&column.title),
                    )
                    .child_opt(sort_icon),
            );

        if options.sortable {
            cx.handlers.register(
                id,
                EventKind::Click,
                Role::Sort {
                    table_id: cx.table_id.to_string(),
                    column_id: column.id.clone(),
                },
            );
        }
        cells.push(cell);
    }

    Element::new(Tag::Tr)
        .class(format!("{block}-header-row"))
        .children(row_number)
        .children(cells)
}
