//! Marker collection and selection state.
//!
//! All mutation goes through [`MarkerStore`] so that at most one marker is
//! selected, no two markers share a grid pixel, and the current marker is
//! always looked up live by id.

use tracing::{debug, warn};

use crate::coordinate::CoordinateTransform;
use crate::error::{Error, Result};
use crate::marker::{Marker, MarkerFields, MarkerId};

pub const DEFAULT_LABEL: &str = "None";

#[derive(Debug, Clone)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    current: Option<MarkerId>,
    default_label: String,
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::with_default_label(DEFAULT_LABEL)
    }

    /// Creates an empty store whose new markers start with `label`.
    pub fn with_default_label(label: impl Into<String>) -> Self {
        Self {
            markers: Vec::new(),
            current: None,
            default_label: label.into(),
        }
    }

    /// Markers in insertion order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id() == id)
    }

    pub fn current_id(&self) -> Option<MarkerId> {
        self.current
    }

    /// The marker loaded into the editor, read from the collection itself.
    pub fn current(&self) -> Option<&Marker> {
        self.current.and_then(|id| self.get(id))
    }

    pub fn selected(&self) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.selected)
    }

    /// Selects the marker at a grid pixel, creating one there if the pixel is free.
    pub fn add_or_select_at(&mut self, screen_x: i32, screen_y: i32, grid_size: u32) -> &Marker {
        let index = match self.index_at(screen_x, screen_y) {
            Some(index) => {
                debug!(screen_x, screen_y, id = %self.markers[index].id(), "selecting existing marker");
                index
            }
            None => {
                let map = CoordinateTransform::new(grid_size).to_logical(screen_x, screen_y);
                let marker = Marker::new((screen_x, screen_y), map, self.default_label.clone());
                debug!(
                    screen_x,
                    screen_y,
                    map_x = map.0,
                    map_y = map.1,
                    id = %marker.id(),
                    "created marker"
                );
                self.markers.push(marker);
                self.markers.len() - 1
            }
        };

        self.select_index(index);
        &self.markers[index]
    }

    /// Selects a marker by id. Unknown ids leave the store untouched.
    pub fn select_by_id(&mut self, id: MarkerId) -> Option<&Marker> {
        let Some(index) = self.index_of(id) else {
            warn!(%id, "select ignored: no such marker");
            return None;
        };

        self.select_index(index);
        Some(&self.markers[index])
    }

    /// Replaces a marker's map position and label, recomputing its grid pixel.
    /// Id and selection state are kept. The marker becomes current.
    pub fn update_by_id(
        &mut self,
        id: MarkerId,
        fields: MarkerFields,
        grid_size: u32,
    ) -> Result<&Marker> {
        let index = self.index_of(id).ok_or(Error::NotFound(id))?;
        let (screen_x, screen_y) =
            CoordinateTransform::new(grid_size).to_screen(fields.map_x, fields.map_y);

        let marker = &mut self.markers[index];
        marker.map_x = fields.map_x;
        marker.map_y = fields.map_y;
        marker.screen_x = screen_x;
        marker.screen_y = screen_y;
        marker.label = fields.label;
        debug!(
            %id,
            map_x = marker.map_x,
            map_y = marker.map_y,
            screen_x,
            screen_y,
            label = %marker.label,
            "updated marker"
        );

        self.current = Some(id);
        Ok(&self.markers[index])
    }

    fn index_at(&self, screen_x: i32, screen_y: i32) -> Option<usize> {
        self.markers.iter().position(|marker| marker.is_at(screen_x, screen_y))
    }

    fn index_of(&self, id: MarkerId) -> Option<usize> {
        self.markers.iter().position(|marker| marker.id() == id)
    }

    fn select_index(&mut self, index: usize) {
        for (i, marker) in self.markers.iter_mut().enumerate() {
            marker.selected = i == index;
        }
        self.current = Some(self.markers[index].id());
    }
}
