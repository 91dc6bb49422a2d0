//! Notifications emitted to collaborators and advisories shown to the user.
//!
//! The core never calls into the data-binding, persistence or lookup layers.
//! It emits a [`Notification`] and lets whoever subscribed react. Listeners
//! run synchronously, in registration order.

use serde::Serialize;

use crate::lookup::LookupRequest;
use crate::sort::SortDirection;

/// A structured, named outcome of an interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Notification {
    /// A header cell advanced its sort cycle. The caller re-renders with
    /// rows sorted accordingly.
    SortChanged {
        table_id: String,
        column_id: String,
        direction: SortDirection,
    },
    RowSelected {
        table_id: String,
        row_index: usize,
    },
    RowAddRequested {
        table_id: String,
    },
    RowDeleteRequested {
        table_id: String,
        row_index: usize,
    },
    /// A cell control's value was edited or set by a lookup.
    CellChanged {
        table_id: String,
        row_index: usize,
        column_id: String,
        value: String,
    },
    LookupRequested {
        table_id: String,
        request: LookupRequest,
    },
    LayoutSaved {
        positions: usize,
    },
}

impl Notification {
    pub fn name(&self) -> &'static str {
        match self {
            Notification::SortChanged { .. } => "sort-changed",
            Notification::RowSelected { .. } => "row-selected",
            Notification::RowAddRequested { .. } => "row-add-requested",
            Notification::RowDeleteRequested { .. } => "row-delete-requested",
            Notification::CellChanged { .. } => "cell-changed",
            Notification::LookupRequested { .. } => "lookup-requested",
            Notification::LayoutSaved { .. } => "layout-saved",
        }
    }

    pub fn table_id(&self) -> Option<&str> {
        match self {
            Notification::SortChanged { table_id, .. }
            | Notification::RowSelected { table_id, .. }
            | Notification::RowAddRequested { table_id }
            | Notification::RowDeleteRequested { table_id, .. }
            | Notification::CellChanged { table_id, .. }
            | Notification::LookupRequested { table_id, .. } => Some(table_id),
            Notification::LayoutSaved { .. } => None,
        }
    }
}

type Listener = Box<dyn FnMut(&Notification)>;

/// Synchronous notification dispatcher.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Notifier({} listeners)", self.listeners.len())
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners are called in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&Notification) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, notification: Notification) {
        log::debug!(
            "notify {} ({} listeners): {:?}",
            notification.name(),
            self.listeners.len(),
            notification
        );
        for listener in &mut self.listeners {
            listener(&notification);
        }
    }
}

/// Severity of an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-visible message queued for the host to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub message: String,
}

impl Advisory {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: AdvisoryLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: AdvisoryLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: AdvisoryLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: AdvisoryLevel::Error,
            message: message.into(),
        }
    }
}
