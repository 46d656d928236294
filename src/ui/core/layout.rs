use super::geom::Rect;

/// Blank margins around a canvas or rect, one count per edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    /// Splits horizontal and vertical slack so the content ends up centered.
    ///
    /// The smaller half goes to the left/top edge; any odd unit goes right/bottom.
    pub const fn centering(h_slack: u16, v_slack: u16) -> Self {
        let left = h_slack / 2;
        let top = v_slack / 2;
        Self {
            left,
            right: h_slack - left,
            top,
            bottom: v_slack - top,
        }
    }

    pub fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl Rect {
    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    pub fn split_top(self, h: u16) -> (Rect, Rect) {
        let top_h = h.min(self.h);
        let top = Rect::new(self.x, self.y, self.w, top_h);
        let rest = Rect::new(
            self.x,
            self.y.saturating_add(top_h),
            self.w,
            self.h.saturating_sub(top_h),
        );
        (top, rest)
    }

    pub fn split_bottom(self, h: u16) -> (Rect, Rect) {
        let bottom_h = h.min(self.h);
        let rest_h = self.h.saturating_sub(bottom_h);
        let rest = Rect::new(self.x, self.y, self.w, rest_h);
        let bottom = Rect::new(self.x, self.y.saturating_add(rest_h), self.w, bottom_h);
        (rest, bottom)
    }

    /// Shifts the rect left/up as needed so it lies inside `bounds`.
    ///
    /// Size is kept; a rect larger than `bounds` is pinned to its origin.
    pub fn fit_within(self, bounds: Rect) -> Rect {
        let mut x = self.x.max(bounds.x);
        let mut y = self.y.max(bounds.y);
        if x.saturating_add(self.w) > bounds.right() {
            x = bounds.right().saturating_sub(self.w).max(bounds.x);
        }
        if y.saturating_add(self.h) > bounds.bottom() {
            y = bounds.bottom().saturating_sub(self.h).max(bounds.y);
        }
        Rect::new(x, y, self.w, self.h)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
