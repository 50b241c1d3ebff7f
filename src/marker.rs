use std::fmt;

use uuid::Uuid;

/// Opaque marker identity, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(Uuid);

impl MarkerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MarkerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    id: MarkerId,
    pub screen_x: i32, // Position in grid pixels
    pub screen_y: i32,
    pub map_x: i32, // Position in centered map coordinates
    pub map_y: i32,
    pub label: String,
    pub selected: bool,
}

impl Marker {
    pub fn new(screen: (i32, i32), map: (i32, i32), label: impl Into<String>) -> Self {
        Self {
            id: MarkerId::new(),
            screen_x: screen.0,
            screen_y: screen.1,
            map_x: map.0,
            map_y: map.1,
            label: label.into(),
            selected: false,
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn is_at(&self, screen_x: i32, screen_y: i32) -> bool {
        self.screen_x == screen_x && self.screen_y == screen_y
    }
}

/// Editable fields of a marker, as submitted from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFields {
    pub map_x: i32,
    pub map_y: i32,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_markers_get_distinct_ids() {
        let a = Marker::new((1, 2), (299, -298), "None");
        let b = Marker::new((1, 2), (299, -298), "None");
        assert_ne!(a.id(), b.id());
        assert!(!a.selected);
    }

    #[test]
    fn test_is_at() {
        let m = Marker::new((250, 100), (50, -200), "Sol");
        assert!(m.is_at(250, 100));
        assert!(!m.is_at(100, 250));
    }
}
