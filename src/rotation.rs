//! Free-running globe rotation with drag override.
//!
//! The auto-rotation advances proportionally to elapsed wall-clock time so
//! the rate is frame-rate independent. A drag session pauses it; pointer
//! deltas map to an angle offset at a fixed sensitivity. Releasing the drag
//! commits the angle and zeroes the auto accumulator, so auto-rotation
//! resumes from the committed value with no jump.

/// Nominal frame used to express the rotation rate, in milliseconds.
pub const REFERENCE_FRAME_MS: f64 = 16.67;

/// Degrees per reference frame.
pub const DEFAULT_RATE: f64 = 0.15;

/// Degrees of rotation per pixel of horizontal pointer travel.
pub const DRAG_SENSITIVITY: f64 = 0.5;

/// Blur/brightness values applied to the scene while dragging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFilter {
    pub blur_px: f64,
    pub brightness: f64,
}

impl MotionFilter {
    pub const NONE: MotionFilter = MotionFilter {
        blur_px: 0.0,
        brightness: 1.0,
    };
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    origin_x: f64,
    base: f64,
    current: f64,
}

/// Continuous rotation state for the landing-page globe.
#[derive(Clone, Copy, Debug)]
pub struct Spin {
    rate: f64,
    committed: f64,
    auto: f64,
    drag: Option<Drag>,
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(DEFAULT_RATE)
    }
}

impl Spin {
    /// `rate` is in degrees per [`REFERENCE_FRAME_MS`].
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            committed: 0.0,
            auto: 0.0,
            drag: None,
        }
    }

    /// Advance the auto-rotation by `elapsed_ms`. No-op while dragging.
    pub fn advance(&mut self, elapsed_ms: f64) {
        if self.drag.is_some() {
            return;
        }
        self.auto += elapsed_ms / REFERENCE_FRAME_MS * self.rate;
    }

    /// Current display angle in degrees.
    pub fn angle(&self) -> f64 {
        match self.drag {
            Some(drag) => drag.current,
            None => self.committed + self.auto,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag session from pointer x. Ignored if one is active.
    ///
    /// The session bases on the currently displayed angle, not the last
    /// committed one, so grabbing the globe never snaps it backwards.
    pub fn begin_drag(&mut self, x: f64) {
        if self.drag.is_some() {
            return;
        }
        let base = self.committed + self.auto;
        self.drag = Some(Drag {
            origin_x: x,
            base,
            current: base,
        });
    }

    /// Update the active drag from pointer x. Ignored with no session.
    pub fn drag_to(&mut self, x: f64) {
        if let Some(drag) = &mut self.drag {
            drag.current = drag.base + (x - drag.origin_x) * DRAG_SENSITIVITY;
        }
    }

    /// Commit the dragged angle and reset the auto accumulator.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.committed = drag.current;
            self.auto = 0.0;
        }
    }

    /// Scene filter derived from how far the current drag has travelled.
    pub fn drag_filter(&self) -> MotionFilter {
        match self.drag {
            None => MotionFilter::NONE,
            Some(drag) => {
                let speed = (drag.current - drag.base).abs();
                MotionFilter {
                    blur_px: (speed * 0.1).min(5.0),
                    brightness: 1.0 + (speed * 0.01).min(0.15),
                }
            }
        }
    }
}
