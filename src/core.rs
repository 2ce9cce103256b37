use crate::error::{OrreryError, OrreryResult};

pub use kurbo::{Point, Rect, Vec2};

/// Milliseconds on a scene clock, relative to an arbitrary origin.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Sum with saturating arithmetic.
    pub fn saturating_add(self, other: Millis) -> Millis {
        Millis(self.0.saturating_add(other.0))
    }

    /// Elapsed time since `earlier`, zero when `earlier` is in the future.
    pub fn since(self, earlier: Millis) -> Millis {
        Millis(self.0.saturating_sub(earlier.0))
    }
}

/// Viewport dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Stand-in dimensions used until the real viewport is known.
    pub const FALLBACK: Viewport = Viewport {
        width: 1920,
        height: 1080,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Replace malformed (zero) dimensions with [`Viewport::FALLBACK`].
    ///
    /// A not-yet-measured viewport is "not ready", never an error.
    pub fn or_fallback(self) -> Viewport {
        if self.width == 0 || self.height == 0 {
            Viewport::FALLBACK
        } else {
            self
        }
    }
}

/// Position as a percentage of viewport height/width, each in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormPoint {
    /// Percent of viewport height from the top edge.
    pub top: f64,
    /// Percent of viewport width from the left edge.
    pub left: f64,
}

impl NormPoint {
    pub fn new(top: f64, left: f64) -> OrreryResult<Self> {
        if !(0.0..=100.0).contains(&top) || !(0.0..=100.0).contains(&left) {
            return Err(OrreryError::validation(
                "NormPoint components must be in [0, 100]",
            ));
        }
        Ok(Self { top, left })
    }

    /// Convert to absolute pixel coordinates in the given viewport.
    pub fn to_pixels(self, viewport: Viewport) -> Point {
        let viewport = viewport.or_fallback();
        Point::new(
            self.left / 100.0 * f64::from(viewport.width),
            self.top / 100.0 * f64::from(viewport.height),
        )
    }
}

/// FNV-1a 64, seeded. Derives stable per-entity sub-seeds from string ids.
pub fn stable_hash64(seed: u64, s: &str) -> u64 {
    let mut h = 0xcbf2_9ce4_8422_2325u64 ^ seed;
    for &b in s.as_bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}
