use serde::{Deserialize, Serialize};

/// Sort state of one header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Next state in the header click cycle: none, asc, desc, none.
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Token used in the `data-sort` attribute and icon modifier class.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::None => "none",
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Parse a `data-sort` attribute; absent or unknown reads as none.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("asc") => SortDirection::Ascending,
            Some("desc") => SortDirection::Descending,
            _ => SortDirection::None,
        }
    }
}
