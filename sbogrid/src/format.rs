//! Display formatting and alignment of grid cell values.

use chrono::NaiveDate;

use crate::column::DataType;
use crate::locale::Locale;
use crate::value::Value;

/// Horizontal alignment of a data cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn for_data_type(data_type: DataType) -> Self {
        match data_type {
            DataType::Number | DataType::Currency | DataType::Percentage => Alignment::Right,
            DataType::Date => Alignment::Center,
            DataType::String | DataType::Boolean => Alignment::Left,
        }
    }

    /// Modifier class under the given block prefix, e.g. `sbo-grid-cell--right`.
    pub fn class(&self, block: &str) -> String {
        let suffix = match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        format!("{block}--{suffix}")
    }
}

/// Format a value for display in a grid cell.
///
/// Empty values always render as the empty string. Values whose shape does
/// not fit the data type pass through in their raw form.
pub fn format_cell_value(value: &Value, data_type: DataType, locale: &Locale) -> String {
    if value.is_empty() {
        return String::new();
    }

    match data_type {
        DataType::Number | DataType::Currency => match value {
            Value::Number(n) => locale.format_number(*n),
            other => other.raw(),
        },
        DataType::Date => match value {
            Value::Date(date) => format_date(*date, locale),
            Value::Text(text) => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
                Ok(date) => format_date(date, locale),
                Err(_) => text.clone(),
            },
            other => other.raw(),
        },
        DataType::Boolean => locale.yes_no(value.truthy()).to_string(),
        DataType::Percentage => match value {
            Value::Number(n) => format!("{n}%"),
            other => other.raw(),
        },
        DataType::String => value.raw(),
    }
}

fn format_date(date: NaiveDate, locale: &Locale) -> String {
    date.format(&locale.date_format).to_string()
}
