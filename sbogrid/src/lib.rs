//! Column-driven data grids and entry matrices rendered as markup.
//!
//! [`render_table`] turns a [`TableConfig`] into an element tree plus the
//! handler roles of its interactive parts. A [`Page`] mounts rendered tables,
//! dispatches events to those roles and emits [`Notification`]s for
//! collaborators to act on.

pub mod column;
pub mod editor;
pub mod error;
pub mod format;
pub mod ids;
pub mod locale;
pub mod lookup;
pub mod notify;
pub mod page;
pub mod role;
pub mod settings;
pub mod sort;
pub mod table;
pub mod value;
pub mod widgets;

pub mod prelude;

pub use column::{visible_columns, ColumnDescriptor, ColumnType, DataType, SelectOption};
pub use editor::{JsonFileStore, LayoutData, LayoutEditor, LayoutStore, MemoryStore, Position};
pub use error::{ConfigError, Fault, LayoutError};
pub use format::{format_cell_value, Alignment};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use locale::Locale;
pub use lookup::{LookupAction, LookupError, LookupProvider, LookupRequest, SimulatedLookup};
pub use notify::{Advisory, AdvisoryLevel, Notification, Notifier};
pub use page::{EventResult, Page};
pub use role::{Role, ScrollDirection};
pub use settings::Settings;
pub use sort::SortDirection;
pub use table::{
    render_table, GridOptions, MatrixOptions, Presentation, Rendered, TableConfig, TableMode,
};
pub use value::{cell_value, row, RowData, Value};
