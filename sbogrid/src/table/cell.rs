//! Cell renderer: the control a column produces at one row.

use sbodom::{Element, EventKind};

use crate::column::{ColumnDescriptor, ColumnType};
use crate::error::Fault;
use crate::ids::{cell_id, trigger_id};
use crate::role::Role;
use crate::value::Value;
use crate::widgets::{CheckBox, ComboBox, EditText, LinkedButton};

use super::RenderContext;

/// Render the control for `column` at `row_index`, prefilled from `value`.
///
/// Returns `None` for static-label columns, which carry no control. The
/// control id is derived from `(table id, row index, column id)` and, when
/// the column is editable, its change events are bound to
/// [`Role::EditCell`].
pub fn render_cell(
    cx: &mut RenderContext<'_>,
    column: &ColumnDescriptor,
    row_index: usize,
    value: Option<&Value>,
) -> Option<Element> {
    let table_id = cx.table_id;
    let id = cell_id(table_id, row_index, &column.id);
    let raw = value.map(Value::raw).unwrap_or_default();
    let disabled = !column.editable;
    // A zero tab index is left to document order
    let tab_index = Some(row_index as u32 * 100 + column.tab_order).filter(|t| *t > 0);

    let edit_role = |trigger: Option<String>| Role::EditCell {
        table_id: table_id.to_string(),
        row_index,
        column_id: column.id.clone(),
        trigger,
    };

    match &column.kind {
        ColumnType::StaticLabel => None,
        ColumnType::SingleSelect => {
            let selected = (!raw.is_empty()).then_some(raw);
            let control = ComboBox::new(&id)
                .options(column.values.iter().cloned())
                .selected(selected)
                .allow_empty(column.allow_empty)
                .size("100%", "100%")
                .disabled(disabled)
                .tab_index(tab_index)
                .data_source(column.data_source.clone())
                .build();
            if column.editable {
                let role = edit_role(None);
                cx.handlers.register(&id, EventKind::Change, role);
            }
            Some(control)
        }
        ColumnType::BooleanToggle => {
            let control = CheckBox::new(&id)
                .checked(value.is_some_and(Value::truthy))
                .disabled(disabled)
                .tab_index(tab_index)
                .data_source(column.data_source.clone())
                .build();
            if column.editable {
                let role = edit_role(None);
                cx.handlers.register(&id, EventKind::Change, role);
            }
            Some(control)
        }
        ColumnType::LookupPair => {
            let button_id = trigger_id(table_id, row_index, &column.id);
            let active = !raw.trim().is_empty();
            let input = EditText::new(&id)
                .value(raw)
                .size("100%", "100%")
                .disabled(disabled)
                .max_length(column.max_length)
                .tab_index(tab_index)
                .data_source(column.data_source.clone())
                .linked_object(column.linked_object.clone())
                .build();
            let trigger = LinkedButton::new(&button_id, &id)
                .linked_object(column.linked_object.clone())
                .active(active)
                .title(cx.locale.linked_button_title.clone())
                .build();

            if column.editable {
                let role = edit_role(Some(button_id.clone()));
                cx.handlers.register(&id, EventKind::Input, role.clone());
                cx.handlers.register(&id, EventKind::Change, role);
            }
            cx.handlers.register(
                &button_id,
                EventKind::Click,
                Role::LookupTrigger {
                    table_id: table_id.to_string(),
                    row_index,
                    column_id: column.id.clone(),
                    input_id: id.clone(),
                    object_type: column.linked_object.clone(),
                },
            );

            Some(
                Element::div()
                    .class("sbo-matrix-input-group")
                    .child(input)
                    .child(trigger),
            )
        }
        ColumnType::TextInput | ColumnType::Unrecognized(_) => {
            if matches!(column.kind, ColumnType::Unrecognized(_)) {
                log::debug!("{}", Fault::UnrecognizedColumnType(column.id.clone()));
            }
            let control = EditText::new(&id)
                .value(raw)
                .size("100%", "100%")
                .disabled(disabled)
                .password(column.is_password)
                .max_length(column.max_length)
                .tab_index(tab_index)
                .data_source(column.data_source.clone())
                .build();
            if column.editable {
                let role = edit_role(None);
                cx.handlers.register(&id, EventKind::Input, role.clone());
                cx.handlers.register(&id, EventKind::Change, role);
            }
            Some(control)
        }
    }
}
