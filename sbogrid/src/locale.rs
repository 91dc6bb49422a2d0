//! Locale conventions for cell formatting and user-facing text.

use serde::{Deserialize, Serialize};

/// Number/date conventions and the fixed captions the widgets display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub thousands_separator: char,
    pub decimal_separator: char,
    /// `chrono` format string for dates.
    pub date_format: String,
    pub yes: String,
    pub no: String,
    pub record_count_label: String,
    pub select_row_to_delete: String,
    pub add_row_title: String,
    pub delete_row_title: String,
    pub linked_button_title: String,
    /// `{count}` is replaced with the number of stored positions.
    pub layout_saved: String,
    pub layout_loaded: String,
    pub layout_missing: String,
    pub positions_reset: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::tr()
    }
}

impl Locale {
    /// Turkish conventions, the suite's native locale.
    pub fn tr() -> Self {
        Self {
            thousands_separator: '.',
            decimal_separator: ',',
            date_format: "%d.%m.%Y".to_string(),
            yes: "Evet".to_string(),
            no: "Hayır".to_string(),
            record_count_label: "Kayıt sayısı".to_string(),
            select_row_to_delete: "Silmek için bir satır seçiniz.".to_string(),
            add_row_title: "Satır Ekle".to_string(),
            delete_row_title: "Satır Sil".to_string(),
            linked_button_title: "İlgili forma git".to_string(),
            layout_saved: "Tasarım kaydedildi: {count} bileşenin konumu saklandı.".to_string(),
            layout_loaded: "Kaydedilen tasarım yüklendi.".to_string(),
            layout_missing: "Kaydedilmiş tasarım bulunamadı.".to_string(),
            positions_reset: "Tüm konumlar sıfırlandı.".to_string(),
        }
    }

    pub fn en() -> Self {
        Self {
            thousands_separator: ',',
            decimal_separator: '.',
            date_format: "%m/%d/%Y".to_string(),
            yes: "Yes".to_string(),
            no: "No".to_string(),
            record_count_label: "Records".to_string(),
            select_row_to_delete: "Select a row to delete.".to_string(),
            add_row_title: "Add Row".to_string(),
            delete_row_title: "Delete Row".to_string(),
            linked_button_title: "Go to linked form".to_string(),
            layout_saved: "Layout saved: {count} positions stored.".to_string(),
            layout_loaded: "Saved layout loaded.".to_string(),
            layout_missing: "No saved layout found.".to_string(),
            positions_reset: "All positions reset.".to_string(),
        }
    }

    /// Look up a built-in locale by tag (`tr`, `tr-TR`, `en`, `en-US`, ...).
    pub fn by_tag(tag: &str) -> Option<Self> {
        let language = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match language.as_str() {
            "tr" => Some(Self::tr()),
            "en" => Some(Self::en()),
            _ => None,
        }
    }

    pub fn yes_no(&self, value: bool) -> &str {
        if value { &self.yes } else { &self.no }
    }

    /// Format a number with digit grouping and at most three fraction
    /// digits, trailing zeros dropped.
    pub fn format_number(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.3}", value.abs());
        let (int_digits, frac_digits) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_digits = frac_digits.trim_end_matches('0');

        let mut out = String::new();
        let is_zero = int_digits.chars().all(|c| c == '0') && frac_digits.is_empty();
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        out.push_str(&group_digits(int_digits, self.thousands_separator));
        if !frac_digits.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_digits);
        }
        out
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
