//! Pointer and form events to store operations.

use tracing::warn;

use crate::coordinate::CoordinateTransform;
use crate::error::{Error, Result};
use crate::marker::{Marker, MarkerFields, MarkerId};
use crate::store::MarkerStore;

/// Live cursor position over the grid, in pixels and map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerReadout {
    pub pixel_x: i32,
    pub pixel_y: i32,
    pub map_x: i32,
    pub map_y: i32,
}

/// Parses an editor coordinate field. Surrounding whitespace is ignored.
/// Values farther than `grid_size` from the map origin are rejected, which
/// keeps the pixel conversion in range.
pub fn parse_coordinate(field: &'static str, raw: &str, grid_size: u32) -> Result<i32> {
    let invalid = || Error::InvalidNumericInput {
        field,
        value: raw.to_string(),
    };
    let value = raw.trim().parse::<i32>().map_err(|_| invalid())?;
    if i64::from(value).abs() > i64::from(grid_size) {
        return Err(invalid());
    }
    Ok(value)
}

/// Permissive fallback for editor input: anything that is not an in-range
/// integer becomes `0`.
pub fn parse_coordinate_or_zero(field: &'static str, raw: &str, grid_size: u32) -> i32 {
    parse_coordinate(field, raw, grid_size).unwrap_or_else(|err| {
        warn!(%err, "falling back to 0");
        0
    })
}

/// Owns the session's marker store and routes UI events into it.
#[derive(Debug, Default)]
pub struct InteractionController {
    store: MarkerStore,
}

impl InteractionController {
    pub fn new(store: MarkerStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &MarkerStore {
        &self.store
    }

    pub fn on_grid_click(&mut self, px: i32, py: i32, grid_size: u32) -> &Marker {
        self.store.add_or_select_at(px, py, grid_size)
    }

    pub fn on_pointer_move(&self, px: i32, py: i32, grid_size: u32) -> PointerReadout {
        let (map_x, map_y) = CoordinateTransform::new(grid_size).to_logical(px, py);
        PointerReadout {
            pixel_x: px,
            pixel_y: py,
            map_x,
            map_y,
        }
    }

    pub fn on_list_select(&mut self, id: MarkerId) -> Option<&Marker> {
        self.store.select_by_id(id)
    }

    pub fn on_editor_submit(
        &mut self,
        id: MarkerId,
        map_x: &str,
        map_y: &str,
        label: &str,
        grid_size: u32,
    ) -> Result<&Marker> {
        let fields = MarkerFields {
            map_x: parse_coordinate_or_zero("x", map_x, grid_size),
            map_y: parse_coordinate_or_zero("y", map_y, grid_size),
            label: label.to_string(),
        };
        self.store.update_by_id(id, fields, grid_size)
    }
}
