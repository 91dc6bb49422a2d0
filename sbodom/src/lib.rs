pub mod element;
pub mod event;
pub mod handler;
pub mod render;
pub mod scroll;

pub use element::{
    closest_with_class, collect_by_class, find_element, find_element_mut, find_first,
    for_each_mut, path_to, Content, Element, Tag,
};
pub use event::{Event, EventKind, Key, Modifiers};
pub use handler::HandlerRegistry;
pub use render::{escape_attr, escape_text, render_pretty, render_to_string};
pub use scroll::{ScrollOffset, ScrollState};
