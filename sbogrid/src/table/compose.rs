//! Table composer: header, body and the mode-specific chrome.

use sbodom::{Element, EventKind, HandlerRegistry, Tag};

use crate::column::ColumnDescriptor;
use crate::ids::{button_id, container_id, IdGenerator};
use crate::locale::Locale;
use crate::role::{Role, ScrollDirection};

use super::config::{GridOptions, MatrixOptions, TableConfig, TableMode};
use super::header::{render_header, HeaderOptions};
use super::row::{render_row, RowOptions};
use super::{Presentation, RenderContext, Rendered};

/// Render a complete table instance.
///
/// The table id is the configured one, or a fresh `grid-N` / `matrix-N`
/// from `ids`. All other ids derive from it.
pub fn render_table(config: &TableConfig, ids: &dyn IdGenerator, locale: &Locale) -> Rendered {
    let presentation = match config.mode {
        TableMode::Grid(_) => Presentation::Grid,
        TableMode::Matrix(_) => Presentation::Matrix,
    };
    let table_id = config.id.clone().unwrap_or_else(|| {
        ids.next_id(match presentation {
            Presentation::Grid => "grid",
            Presentation::Matrix => "matrix",
        })
    });

    let mut handlers = HandlerRegistry::new();
    let root = {
        let mut cx = RenderContext::new(&table_id, locale, &mut handlers);
        match &config.mode {
            TableMode::Grid(options) => compose_grid(&mut cx, &config.columns, options),
            TableMode::Matrix(options) => compose_matrix(&mut cx, &config.columns, options),
        }
    };

    log::debug!(
        "rendered {} {} ({} columns, {} handlers)",
        presentation.block(),
        table_id,
        config.columns.len(),
        handlers.len()
    );

    Rendered {
        table_id,
        presentation,
        root,
        handlers,
    }
}

fn table_skeleton(
    cx: &RenderContext<'_>,
    presentation: Presentation,
    header: Element,
    rows: Vec<Element>,
) -> Element {
    let block = presentation.block();
    Element::div()
        .id(container_id(cx.table_id))
        .class(presentation.container_class())
        .child(
            Element::new(Tag::Table)
                .class(format!("{block}-table"))
                .child(
                    Element::new(Tag::Thead)
                        .class(format!("{block}-header"))
                        .child(header),
                )
                .child(
                    Element::new(Tag::Tbody)
                        .class(format!("{block}-body"))
                        .children(rows),
                ),
        )
}

fn compose_grid(
    cx: &mut RenderContext<'_>,
    columns: &[ColumnDescriptor],
    options: &GridOptions,
) -> Element {
    let presentation = Presentation::Grid;
    let header = render_header(
        cx,
        columns,
        &HeaderOptions {
            presentation,
            show_row_numbers: options.show_row_numbers,
            sortable: options.allow_sorting,
        },
    );

    let row_options = RowOptions {
        presentation,
        show_row_numbers: options.show_row_numbers,
        alternate: options.alternate_row_color,
        selectable: options.allow_selection,
    };
    let rows = options
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| render_row(cx, columns, &row_options, index, Some(row)))
        .collect();

    let footer = Element::div().class("sbo-grid-footer").child(
        Element::span().class("sbo-grid-record-count").text(format!(
            "{}: {}",
            cx.locale.record_count_label,
            options.rows.len()
        )),
    );

    Element::div()
        .id(cx.table_id)
        .class(presentation.root_class())
        .class_if(options.disabled, "sbo-grid--disabled")
        .class_if(options.show_grid_lines, "sbo-grid--lines")
        .style("width", &options.width)
        .style("height", &options.height)
        .data("table-instance", "grid")
        .attr_opt("data-table", options.data_table.as_deref())
        .data("allow-sorting", options.allow_sorting.to_string())
        .data("allow-selection", options.allow_selection.to_string())
        .child(table_skeleton(cx, presentation, header, rows))
        .child(footer)
}

fn compose_matrix(
    cx: &mut RenderContext<'_>,
    columns: &[ColumnDescriptor],
    options: &MatrixOptions,
) -> Element {
    let presentation = Presentation::Matrix;
    let header = render_header(
        cx,
        columns,
        &HeaderOptions {
            presentation,
            show_row_numbers: options.show_row_numbers,
            sortable: false,
        },
    );

    let row_options = RowOptions {
        presentation,
        show_row_numbers: options.show_row_numbers,
        alternate: false,
        selectable: options.allow_row_selection,
    };
    let rows = (0..options.row_count)
        .map(|index| render_row(cx, columns, &row_options, index, options.values.get(index)))
        .collect();

    let container = table_skeleton(cx, presentation, header, rows)
        .style("height", &options.height)
        .data("scroll-top", "0");

    let mut controls = vec![
        scroll_button(cx, ScrollDirection::Up),
        scroll_button(cx, ScrollDirection::Down),
    ];
    if options.allow_add_row {
        let id = button_id(cx.table_id, "add");
        cx.handlers.register(
            &id,
            EventKind::Click,
            Role::AddRow {
                table_id: cx.table_id.to_string(),
            },
        );
        controls.push(control_button(id, "add", &cx.locale.add_row_title, "+"));
    }
    if options.allow_delete_row {
        let id = button_id(cx.table_id, "delete");
        cx.handlers.register(
            &id,
            EventKind::Click,
            Role::DeleteRow {
                table_id: cx.table_id.to_string(),
            },
        );
        controls.push(control_button(id, "delete", &cx.locale.delete_row_title, "-"));
    }

    Element::div()
        .id(cx.table_id)
        .class(presentation.root_class())
        .class_if(options.disabled, "sbo-matrix-wrapper--disabled")
        .style("width", &options.width)
        .data("table-instance", "matrix")
        .attr_opt("data-table", options.data_table.as_deref())
        .data("allow-add-row", options.allow_add_row.to_string())
        .data("allow-delete-row", options.allow_delete_row.to_string())
        .data("row-count", options.row_count.to_string())
        .child(container)
        .child(Element::div().class("sbo-matrix-controls").children(controls))
}

fn scroll_button(cx: &mut RenderContext<'_>, direction: ScrollDirection) -> Element {
    let (action, glyph) = match direction {
        ScrollDirection::Up => ("up", "▲"),
        ScrollDirection::Down => ("down", "▼"),
    };
    let id = button_id(cx.table_id, action);
    cx.handlers.register(
        &id,
        EventKind::Click,
        Role::Scroll {
            table_id: cx.table_id.to_string(),
            direction,
        },
    );
    Element::button()
        .id(id)
        .class("sbo-matrix-btn")
        .class(format!("sbo-matrix-btn--{action}"))
        .text(glyph)
}

fn control_button(id: String, action: &str, title: &str, glyph: &str) -> Element {
    Element::button()
        .id(id)
        .class("sbo-matrix-control-btn")
        .class(format!("sbo-matrix-control-btn--{action}"))
        .attr("title", title)
        .child(
            Element::span()
                .class("sbo-matrix-control-icon")
                .text(glyph),
        )
}
