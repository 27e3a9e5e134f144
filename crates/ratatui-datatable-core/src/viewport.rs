/// Scroll offsets of a viewport over some larger content, in cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewportState {
    pub x: u32,
    pub y: u32,
    pub viewport_w: u16,
    pub viewport_h: u16,
    pub content_w: u32,
    pub content_h: u32,
}

impl ViewportState {
    pub fn set_viewport(&mut self, w: u16, h: u16) {
        self.viewport_w = w;
        self.viewport_h = h;
        self.clamp();
    }

    pub fn set_content(&mut self, w: u32, h: u32) {
        self.content_w = w;
        self.content_h = h;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.y = self.y.min(self.max_y());
        self.x = self.x.min(self.max_x());
    }

    pub fn scroll_y_by(&mut self, delta: i32) {
        let next = self.y as i64 + delta as i64;
        self.y = next.clamp(0, self.max_y() as i64) as u32;
    }

    pub fn to_top(&mut self) {
        self.y = 0;
    }

    pub fn to_left(&mut self) {
        self.x = 0;
    }

    /// Scrolls vertically just enough for content row `row` to be inside the viewport.
    pub fn ensure_visible_y(&mut self, row: u32) {
        if row < self.y {
            self.y = row;
        } else if row >= self.y.saturating_add(self.viewport_h as u32) {
            self.y = row.saturating_sub(self.viewport_h.saturating_sub(1) as u32);
        }
        self.clamp();
    }

    /// Scrolls horizontally just enough for content column `col` to be inside the viewport.
    pub fn ensure_visible_x(&mut self, col: u32) {
        if col < self.x {
            self.x = col;
        } else if col >= self.x.saturating_add(self.viewport_w as u32) {
            self.x = col.saturating_sub(self.viewport_w.saturating_sub(1) as u32);
        }
        self.clamp();
    }

    fn max_y(&self) -> u32 {
        self.content_h.saturating_sub(self.viewport_h as u32)
    }

    fn max_x(&self) -> u32 {
        self.content_w.saturating_sub(self.viewport_w as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_clamps_both_axes() {
        let mut s = ViewportState::default();
        s.set_viewport(10, 5);
        s.set_content(12, 6);
        s.x = 99;
        s.y = 99;
        s.clamp();
        assert_eq!(s.x, 2);
        assert_eq!(s.y, 1);
    }

    #[test]
    fn ensure_visible_scrolls_minimally() {
        let mut s = ViewportState::default();
        s.set_viewport(4, 3);
        s.set_content(20, 20);
        s.ensure_visible_y(5);
        assert_eq!(s.y, 3);
        s.ensure_visible_y(4);
        assert_eq!(s.y, 3);
        s.ensure_visible_y(1);
        assert_eq!(s.y, 1);
        s.ensure_visible_x(10);
        assert_eq!(s.x, 7);
    }
}
