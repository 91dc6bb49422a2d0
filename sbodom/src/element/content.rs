#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// Text, escaped on serialization.
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Text(text) => text.is_empty(),
            Self::Children(children) => children.is_empty(),
        }
    }
}
