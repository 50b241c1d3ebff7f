/// The square star grid for one session. Its size is fixed once created.
pub struct Grid {
    size: u32,
    show_axes: bool,
}

impl Grid {
    pub fn new(size: u32, show_axes: bool) -> Self {
        Self { size, show_axes }
    }

    pub fn get_size(&self) -> u32 {
        self.size
    }

    pub fn axes_visible(&self) -> bool {
        self.show_axes
    }

    pub fn set_axes_visible(&mut self, visible: bool) {
        self.show_axes = visible;
    }

    // Both edges are inclusive, matching the transform's pixel range
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let size = self.size as i32;
        (0..=size).contains(&px) && (0..=size).contains(&py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let grid = Grid::new(600, true);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(600, 600));
        assert!(!grid.contains(-1, 10));
        assert!(!grid.contains(10, 601));
    }

    #[test]
    fn test_axes_toggle() {
        let mut grid = Grid::new(400, false);
        assert!(!grid.axes_visible());
        grid.set_axes_visible(true);
        assert!(grid.axes_visible());
        assert_eq!(grid.get_size(), 400);
    }
}
