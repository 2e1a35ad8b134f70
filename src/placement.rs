/// Screen rectangle in whatever unit the caller works in. For the overlay
/// this is the monitor working area, i.e. the desktop minus the taskbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Anchor the window towards the bottom-right of the working area:
/// `right_pct` of the area width inset from the right edge and `bottom_pct`
/// of the area height inset from the bottom edge.
pub fn anchored_position(
    area: WorkArea,
    window_width: f32,
    window_height: f32,
    right_pct: f32,
    bottom_pct: f32,
) -> (f32, f32) {
    let left = area.x + (area.width - window_width) - area.width * right_pct;
    let top = area.y + (area.height - window_height) - area.height * bottom_pct;
    (left, top)
}

/// Applies the anchored position exactly once per window lifetime, no matter
/// how many layout events fire after the first.
#[derive(Debug, Default)]
pub struct OncePlacement {
    applied: bool,
}

impl OncePlacement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> bool {
        self.applied
    }

    /// Returns the target position on the first call, `None` afterwards.
    pub fn resolve(
        &mut self,
        area: WorkArea,
        window_width: f32,
        window_height: f32,
        right_pct: f32,
        bottom_pct: f32,
    ) -> Option<(f32, f32)> {
        if self.applied {
            return None;
        }
        self.applied = true;
        Some(anchored_position(
            area,
            window_width,
            window_height,
            right_pct,
            bottom_pct,
        ))
    }
}
