//! Cell-level input widgets.
//!
//! Plain builders producing [`Element`](sbodom::Element)s with the legacy
//! suite's class tokens. The table renderer treats them as opaque markup
//! providers keyed by column type.

mod check_box;
mod combo_box;
mod edit_text;
pub mod linked_button;

pub use check_box::CheckBox;
pub use combo_box::ComboBox;
pub use edit_text::EditText;
pub use linked_button::LinkedButton;
