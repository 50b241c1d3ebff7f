use egui::{Pos2, Rect, Vec2};

/// Places the square grid inside the available panel area.
pub struct Canvas {
    size: f32,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self { size: size as f32 }
    }

    pub fn get_size(&self) -> f32 {
        self.size
    }

    /// The grid's on-screen rectangle, centered in `view_rect`.
    pub fn get_screen_rect(&self, view_rect: Rect) -> Rect {
        Rect::from_center_size(view_rect.center(), Vec2::splat(self.size))
    }

    /// Converts a screen position to whole grid pixels relative to the grid's top-left corner.
    pub fn screen_to_grid_pos(&self, screen_pos: Pos2, view_rect: Rect) -> (i32, i32) {
        let offset = screen_pos - self.get_screen_rect(view_rect).min;
        (offset.x.floor() as i32, offset.y.floor() as i32)
    }

    pub fn grid_to_screen_pos(&self, px: i32, py: i32, view_rect: Rect) -> Pos2 {
        self.get_screen_rect(view_rect).min + Vec2::new(px as f32, py as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::new(800.0, 700.0))
    }

    #[test]
    fn test_screen_rect_is_centered() {
        let canvas = Canvas::new(600);
        let rect = canvas.get_screen_rect(view());
        assert_eq!(rect.min, Pos2::new(200.0, 100.0));
        assert_eq!(rect.max, Pos2::new(800.0, 700.0));
    }

    #[test]
    fn test_screen_to_grid_floors() {
        let canvas = Canvas::new(600);
        assert_eq!(canvas.screen_to_grid_pos(Pos2::new(450.7, 200.2), view()), (250, 100));
        assert_eq!(canvas.screen_to_grid_pos(Pos2::new(199.5, 100.0), view()), (-1, 0));
    }

    #[test]
    fn test_grid_to_screen() {
        let canvas = Canvas::new(600);
        assert_eq!(canvas.grid_to_screen_pos(300, 300, view()), Pos2::new(500.0, 400.0));
    }
}
