/// Maps between grid pixels (origin top-left) and map coordinates centered on
/// the grid midpoint. The map x axis is mirrored: it grows leftward.
///
/// The midpoint pixel maps to `(0, 0)`, and `(0, 0)` maps back to the pixel
/// origin rather than the midpoint, so the transform is not a bijection at
/// that single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateTransform {
    grid_size: u32,
}

impl CoordinateTransform {
    pub fn new(grid_size: u32) -> Self {
        Self { grid_size }
    }

    pub fn half(&self) -> i32 {
        (self.grid_size / 2) as i32
    }

    /// Converts grid pixel coordinates to map coordinates
    pub fn to_logical(&self, px: i32, py: i32) -> (i32, i32) {
        let half = self.half();
        let map_x = if px == half { 0 } else { half - px };
        let map_y = if py == half { 0 } else { py - half };
        (map_x, map_y)
    }

    /// Converts map coordinates back to grid pixel coordinates
    pub fn to_screen(&self, map_x: i32, map_y: i32) -> (i32, i32) {
        let half = self.half();
        let px = if map_x == 0 { 0 } else { half.saturating_sub(map_x) };
        let py = if map_y == 0 { 0 } else { map_y.saturating_add(half) };
        (px, py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_fixed_point() {
        let t = CoordinateTransform::new(600);
        assert_eq!(t.to_logical(300, 300), (0, 0));
        assert_eq!(t.to_screen(0, 0), (0, 0));
    }

    #[test]
    fn test_pixel_roundtrip_excluding_center() {
        let t = CoordinateTransform::new(600);
        for p in (0..=600).filter(|p| *p != 300) {
            let (map_x, map_y) = t.to_logical(p, p);
            assert_eq!(t.to_screen(map_x, map_y), (p, p), "pixel {p}");
            assert_eq!(t.to_logical(p, 600 - p).0, map_x);
        }
    }

    #[test]
    fn test_map_roundtrip_over_image() {
        let t = CoordinateTransform::new(600);
        for px in (0..=600).step_by(7).filter(|p| *p != 300) {
            for py in (0..=600).step_by(11).filter(|p| *p != 300) {
                let (map_x, map_y) = t.to_logical(px, py);
                let (sx, sy) = t.to_screen(map_x, map_y);
                assert_eq!(t.to_logical(sx, sy), (map_x, map_y));
            }
        }
    }

    #[test]
    fn test_axes_orientation() {
        let t = CoordinateTransform::new(600);
        // Right of centre is negative map x, below centre is positive map y.
        assert_eq!(t.to_logical(400, 450), (-100, 150));
        assert_eq!(t.to_logical(0, 0), (300, -300));
        assert_eq!(t.to_logical(600, 600), (-300, 300));
        assert_eq!(t.to_logical(250, 100), (50, -200));
    }

    #[test]
    fn test_to_screen_known_values() {
        let t = CoordinateTransform::new(600);
        assert_eq!(t.to_screen(5, -3), (295, 297));
        assert_eq!(t.to_screen(300, -300), (0, 0));
    }

    #[test]
    fn test_to_screen_saturates_at_i32_bounds() {
        let t = CoordinateTransform::new(600);
        assert_eq!(t.to_screen(i32::MIN, i32::MAX), (i32::MAX, i32::MAX));
        assert_eq!(t.to_screen(i32::MAX, i32::MIN), (300 - i32::MAX, i32::MIN + 300));
    }

    #[test]
    fn test_odd_grid_size_floors_half() {
        let t = CoordinateTransform::new(601);
        assert_eq!(t.half(), 300);
        assert_eq!(t.to_logical(300, 300), (0, 0));
        assert_eq!(t.to_logical(301, 299), (-1, -1));
    }
}
