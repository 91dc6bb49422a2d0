//! Handler roles bound to rendered elements.
//!
//! The renderer registers a [`Role`] against each interactive element id;
//! [`Page`](crate::Page) resolves incoming events to roles and runs the
//! matching behavior.

use serde::{Deserialize, Serialize};

/// Direction of a matrix scroll nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

/// What an element does when an event reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Header cell cycling the column's sort state.
    Sort { table_id: String, column_id: String },
    /// Row surface selecting the row.
    SelectRow { table_id: String, row_index: usize },
    /// Matrix add-row trigger.
    AddRow { table_id: String },
    /// Matrix delete-row trigger.
    DeleteRow { table_id: String },
    /// Matrix scroll nudge.
    Scroll {
        table_id: String,
        direction: ScrollDirection,
    },
    /// Editable cell control. `trigger` is the paired lookup trigger id.
    EditCell {
        table_id: String,
        row_index: usize,
        column_id: String,
        trigger: Option<String>,
    },
    /// Lookup trigger next to `input_id`.
    LookupTrigger {
        table_id: String,
        row_index: usize,
        column_id: String,
        input_id: String,
        object_type: Option<String>,
    },
}

impl Role {
    pub fn table_id(&self) -> &str {
        match self {
            Role::Sort { table_id, .. }
            | Role::SelectRow { table_id, .. }
            | Role::AddRow { table_id }
            | Role::DeleteRow { table_id }
            | Role::Scroll { table_id, .. }
            | Role::EditCell { table_id, .. }
            | Role::LookupTrigger { table_id, .. } => table_id,
        }
    }
}
