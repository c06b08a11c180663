use super::constants::{
    CURSOR_DOT_HOVER_SCALE, CURSOR_OUTLINE_HOVER_SCALE, CURSOR_TRAIL_SMOOTHING,
};
use glam::Vec2;

/// Two markers following the pointer: the dot snaps, the outline eases in.
#[derive(Clone, Copy, Debug)]
pub struct CursorTrail {
    target: Vec2,
    dot: Vec2,
    outline: Vec2,
    smoothing: f32,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new(CURSOR_TRAIL_SMOOTHING)
    }
}

impl CursorTrail {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            dot: Vec2::ZERO,
            outline: Vec2::ZERO,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// One frame: first-order exponential smoothing of the outline.
    pub fn step(&mut self) {
        self.dot = self.target;
        self.outline += (self.target - self.outline) * self.smoothing;
    }

    #[inline]
    pub fn dot(&self) -> Vec2 {
        self.dot
    }

    #[inline]
    pub fn outline(&self) -> Vec2 {
        self.outline
    }
}

/// CSS transforms for (dot, outline) depending on hover over an interactive element.
pub fn hover_transforms(hovered: bool) -> (String, String) {
    let (dot, outline) = if hovered {
        (CURSOR_DOT_HOVER_SCALE, CURSOR_OUTLINE_HOVER_SCALE)
    } else {
        (1.0, 1.0)
    };
    (centered_scale(dot), centered_scale(outline))
}

#[inline]
fn centered_scale(scale: f32) -> String {
    format!("translate(-50%, -50%) scale({})", scale)
}
