use crate::controller::PointerReadout;
use crate::marker::{Marker, MarkerId};

#[derive(Default)]
pub struct UiState {
    // Editor form, loaded from the current marker
    pub editor_id: Option<MarkerId>,
    pub editor_label: String,
    pub editor_map_x: String,
    pub editor_map_y: String,

    // Live cursor readout
    pub pointer: Option<PointerReadout>,

    pub status: Option<String>,
}

impl UiState {
    pub fn load_editor(&mut self, marker: &Marker) {
        self.editor_id = Some(marker.id());
        self.editor_label = marker.label.clone();
        self.editor_map_x = marker.map_x.to_string();
        self.editor_map_y = marker.map_y.to_string();
    }

    // A fresh selection drops the previous status message
    pub fn select(&mut self, marker: &Marker) {
        self.status = None;
        self.load_editor(marker);
    }

    pub fn readout_text(&self) -> String {
        match self.pointer {
            Some(p) => format!("({}, {}) => ({}, {})", p.pixel_x, p.pixel_y, p.map_x, p.map_y),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_editor() {
        let marker = Marker::new((295, 297), (5, -3), "Sol");
        let mut state = UiState::default();
        state.load_editor(&marker);
        assert_eq!(state.editor_id, Some(marker.id()));
        assert_eq!(state.editor_map_x, "5");
        assert_eq!(state.editor_map_y, "-3");
        assert_eq!(state.editor_label, "Sol");
    }

    #[test]
    fn test_select_clears_status() {
        let marker = Marker::new((250, 100), (50, -200), "None");
        let mut state = UiState {
            status: Some("Clipboard unavailable".to_string()),
            ..UiState::default()
        };
        state.select(&marker);
        assert_eq!(state.status, None);
        assert_eq!(state.editor_id, Some(marker.id()));
        assert_eq!(state.editor_map_x, "50");
    }

    #[test]
    fn test_readout_text() {
        let mut state = UiState::default();
        assert_eq!(state.readout_text(), "-");
        state.pointer = Some(PointerReadout {
            pixel_x: 250,
            pixel_y: 100,
            map_x: 50,
            map_y: -200,
        });
        assert_eq!(state.readout_text(), "(250, 100) => (50, -200)");
    }
}
