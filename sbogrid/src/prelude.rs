//! Prelude module for convenient imports.
//!
//! ```ignore
//! use sbogrid::prelude::*;
//! ```

// Configuration
pub use crate::column::{ColumnDescriptor, ColumnType, DataType, SelectOption};
pub use crate::locale::Locale;
pub use crate::settings::Settings;
pub use crate::table::{GridOptions, MatrixOptions, TableConfig};
pub use crate::value::{row, RowData, Value};

// Rendering and interaction
pub use crate::editor::{LayoutEditor, LayoutStore};
pub use crate::ids::{IdGenerator, SequentialIds};
pub use crate::lookup::{LookupProvider, LookupRequest};
pub use crate::notify::{Advisory, Notification};
pub use crate::page::{EventResult, Page};
pub use crate::sort::SortDirection;
pub use crate::table::{render_table, Rendered};

// Re-export the markup types events and trees are built from
pub use sbodom::{Element, Event, Key, Modifiers};
