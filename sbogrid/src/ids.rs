//! Identifier generation and the derived ids of table parts.
//!
//! Rendering never invents ids from the clock. A table either carries a
//! caller-supplied id or takes one from an injected [`IdGenerator`]; every
//! other id is derived from the table id, so two renders of the same
//! configuration produce identical markup.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh identifiers.
pub trait IdGenerator {
    /// A new id starting with `prefix`.
    fn next_id(&self, prefix: &str) -> String;
}

/// Monotonic counter: `prefix-0`, `prefix-1`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, prefix: &str) -> String {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}-{id}")
    }
}

/// Random v4 uuids: `prefix-<32 hex digits>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", Uuid::new_v4().simple())
    }
}

pub fn container_id(table_id: &str) -> String {
    format!("{table_id}_container")
}

pub fn header_cell_id(table_id: &str, column_id: &str) -> String {
    format!("{table_id}_h_{column_id}")
}

pub fn row_id(table_id: &str, row_index: usize) -> String {
    format!("{table_id}_r_{row_index}")
}

pub fn row_number_cell_id(table_id: &str, row_index: usize) -> String {
    format!("{table_id}_rn_{row_index}")
}

/// Id of the control in cell `(row_index, column_id)`.
pub fn cell_id(table_id: &str, row_index: usize, column_id: &str) -> String {
    format!("{table_id}_{row_index}_{column_id}")
}

/// Id of the lookup trigger paired with the control in cell
/// `(row_index, column_id)`. The `lk` marker keeps it apart from cell ids,
/// whose first segment after the table id is always the row index.
pub fn trigger_id(table_id: &str, row_index: usize, column_id: &str) -> String {
    format!("{table_id}_lk_{row_index}_{column_id}")
}

pub fn button_id(table_id: &str, action: &str) -> String {
    format!("{table_id}_{action}")
}
