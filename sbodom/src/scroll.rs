use std::collections::HashMap;

/// Scroll offset for a scrollable element, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub x: u32,
    pub y: u32,
}

impl ScrollOffset {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Tracks scroll offsets for scrollable elements.
/// This is host-managed state that persists across events but not across
/// a fresh render.
#[derive(Debug, Default)]
pub struct ScrollState {
    offsets: HashMap<String, ScrollOffset>,
    /// Maximum offsets reported by the host (element_id -> (max_x, max_y))
    extents: HashMap<String, (u32, u32)>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scroll offset for an element.
    pub fn get(&self, id: &str) -> ScrollOffset {
        self.offsets.get(id).copied().unwrap_or_default()
    }

    /// Set the scroll offset for an element, clamping to its extent if known.
    pub fn set(&mut self, id: &str, x: u32, y: u32) {
        let (x, y) = self.clamped(id, x, y);
        self.offsets.insert(id.to_string(), ScrollOffset::new(x, y));
    }

    /// Scroll an element by a delta amount.
    /// Returns true if the scroll offset changed.
    pub fn scroll_by(&mut self, id: &str, dx: i32, dy: i32) -> bool {
        let current = self.get(id);
        let new_x = (current.x as i64 + dx as i64).max(0) as u32;
        let new_y = (current.y as i64 + dy as i64).max(0) as u32;
        let (new_x, new_y) = self.clamped(id, new_x, new_y);

        if new_x != current.x || new_y != current.y {
            self.offsets
                .insert(id.to_string(), ScrollOffset::new(new_x, new_y));
            true
        } else {
            false
        }
    }

    /// Record the scrollable range of an element (content size minus
    /// viewport size) and clamp its current offset to it.
    pub fn set_extent(&mut self, id: &str, max_x: u32, max_y: u32) {
        self.extents.insert(id.to_string(), (max_x, max_y));
        if let Some(offset) = self.offsets.get_mut(id) {
            offset.x = offset.x.min(max_x);
            offset.y = offset.y.min(max_y);
        }
    }

    /// Get the recorded extent for an element.
    pub fn extent(&self, id: &str) -> Option<(u32, u32)> {
        self.extents.get(id).copied()
    }

    /// Forget everything about an element.
    pub fn remove(&mut self, id: &str) {
        self.offsets.remove(id);
        self.extents.remove(id);
    }

    fn clamped(&self, id: &str, x: u32, y: u32) -> (u32, u32) {
        match self.extents.get(id) {
            Some((max_x, max_y)) => (x.min(*max_x), y.min(*max_y)),
            None => (x, y),
        }
    }
}
