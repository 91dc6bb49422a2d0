//! Lookup capability behind lookup-pair cells.
//!
//! Activating a lookup trigger produces a [`LookupRequest`]. The host runs it
//! through a [`LookupProvider`], either opening the detail view of the value
//! already in the input or letting the user choose one from a list.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// What the trigger asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LookupAction {
    /// The input holds `value`: open its detail view.
    OpenDetail { value: String },
    /// The input is empty: pick a value from a list.
    ChooseFromList,
}

/// A lookup issued by a trigger, addressed back to its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest {
    pub table_id: String,
    pub input_id: String,
    pub row_index: usize,
    pub column_id: String,
    pub object_type: Option<String>,
    pub action: LookupAction,
}

impl LookupRequest {
    /// Build the request for an input currently holding `value`.
    pub fn for_value(
        table_id: impl Into<String>,
        input_id: impl Into<String>,
        row_index: usize,
        column_id: impl Into<String>,
        object_type: Option<String>,
        value: &str,
    ) -> Self {
        let value = value.trim();
        let action = if value.is_empty() {
            LookupAction::ChooseFromList
        } else {
            LookupAction::OpenDetail {
                value: value.to_string(),
            }
        };
        Self {
            table_id: table_id.into(),
            input_id: input_id.into(),
            row_index,
            column_id: column_id.into(),
            object_type,
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("lookup unavailable: {0}")]
    Unavailable(String),
    #[error("lookup cancelled")]
    Cancelled,
}

/// Display name of a business object type code.
pub fn object_type_name(object_type: &str) -> String {
    let name = match object_type {
        "2" => "Business Partner",
        "4" => "Item Master Data",
        "13" => "Sales Invoice",
        "14" => "Sales Delivery",
        "15" => "Sales Return",
        "17" => "Sales Order",
        "18" => "Purchase Order",
        "19" => "Purchase Invoice",
        "20" => "Purchase Delivery",
        "21" => "Purchase Return",
        other => return format!("Object Type {other}"),
    };
    name.to_string()
}

/// Asynchronous lookup dialogs provided by the host.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    /// Let the user choose a value of `object_type`. `Ok(None)` when
    /// nothing was chosen.
    async fn choose(&self, object_type: Option<&str>) -> Result<Option<String>, LookupError>;

    /// Open the detail view of `value`.
    async fn open_detail(&self, object_type: Option<&str>, value: &str) -> Result<(), LookupError>;
}

/// Placeholder provider: answers after a fixed delay with a canned value
/// for business partners and items.
#[derive(Debug, Clone)]
pub struct SimulatedLookup {
    delay: Duration,
}

impl Default for SimulatedLookup {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(100),
        }
    }
}

impl SimulatedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl LookupProvider for SimulatedLookup {
    async fn choose(&self, object_type: Option<&str>) -> Result<Option<String>, LookupError> {
        log::debug!("choose from list for object type {:?}", object_type);
        tokio::time::sleep(self.delay).await;
        Ok(match object_type {
            Some("2") => Some("C20000".to_string()),
            Some("4") => Some("A00001".to_string()),
            _ => None,
        })
    }

    async fn open_detail(&self, object_type: Option<&str>, value: &str) -> Result<(), LookupError> {
        let name = object_type.map(object_type_name).unwrap_or_default();
        log::info!("opening {} form for {}", name, value);
        Ok(())
    }
}
