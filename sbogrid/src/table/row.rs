//! Row builder.

use sbodom::{Element, EventKind, Tag};

use crate::column::{visible_columns, ColumnDescriptor};
use crate::format::{format_cell_value, Alignment};
use crate::ids::{row_id, row_number_cell_id};
use crate::role::Role;
use crate::value::{cell_value, RowData};

use super::cell::render_cell;
use super::{Presentation, RenderContext};

/// Row options.
#[derive(Debug, Clone, Copy)]
pub struct RowOptions {
    pub presentation: Presentation,
    pub show_row_numbers: bool,
    /// Mark odd rows with the alternate class. Grid only.
    pub alternate: bool,
    /// Mark the row selectable and bind clicks on its whole surface.
    pub selectable: bool,
}

/// Render one row.
///
/// Grid rows show each visible column's value formatted by data type.
/// Matrix rows hold one cell control per visible column, prefilled from
/// `row` when given.
pub fn render_row(
    cx: &mut RenderContext<'_>,
    columns: &[ColumnDescriptor],
    options: &RowOptions,
    row_index: usize,
    row: Option<&RowData>,
) -> Element {
    let block = options.presentation.block();
    let cell_class = format!("{block}-cell");
    let id = row_id(cx.table_id, row_index);

    let row_number = options.show_row_numbers.then(|| {
        Element::new(Tag::Td)
            .id(row_number_cell_id(cx.table_id, row_index))
            .class(cell_class.clone())
            .class(format!("{cell_class}--row-number"))
            .child(
                Element::span()
                    .class(format!("{block}-row-number"))
                    .text((row_index + 1).to_string()),
            )
    });

    let mut cells = Vec::new();
    for column in visible_columns(columns) {
        let cell = match options.presentation {
            Presentation::Grid => {
                let value = row.map(|r| cell_value(r, &column.id));
                let raw = value.map(|v| v.raw()).unwrap_or_default();
                let display = value
                    .map(|v| format_cell_value(v, column.data_type, cx.locale))
                    .unwrap_or_default();
                Element::new(Tag::Td)
                    .class(cell_class.clone())
                    .class(Alignment::for_data_type(column.data_type).class(&cell_class))
                    .data("column-id", &column.id)
                    .data("value", raw)
                    .child(
                        Element::span()
                            .class(format!("{cell_class}-content"))
                            .text(display),
                    )
            }
            Presentation::Matrix => {
                let value = row.and_then(|r| r.get(&column.id));
                let control = render_cell(cx, column, row_index, value);
                Element::new(Tag::Td)
                    .class(cell_class.clone())
                    .class(format!("{cell_class}--data"))
                    .data("column-id", &column.id)
                    .data("row-index", row_index.to_string())
                    .child_opt(control)
            }
        };
        cells.push(cell);
    }

    if options.selectable {
        cx.handlers.register(
            &id,
            EventKind::Click,
            Role::SelectRow {
                table_id: cx.table_id.to_string(),
                row_index,
            },
        );
    }

    let row_class = options.presentation.row_class();
    Element::new(Tag::Tr)
        .id(id)
        .class(row_class.clone())
        .class_if(
            options.alternate && row_index % 2 == 1,
            format!("{row_class}--alternate"),
        )
        .class_if(options.selectable, format!("{row_class}--selectable"))
        .data("row-index", row_index.to_string())
        .children(row_number)
        .children(cells)
}
