//! Orbit and constellation geometry for the mutuals scene.
//!
//! Everything here is pure: target coordinates are computed once from the
//! viewport and the entity's stable index, and the rendering layer animates
//! toward them. Golden-angle spacing keeps consecutive indices from
//! clustering visually.

use crate::core::{Millis, Point, Viewport};

/// Golden-angle increment in degrees between consecutive orbit slots.
pub const GOLDEN_ANGLE_DEG: f64 = 137.5;

/// Number of discrete orbit rings before radii repeat.
pub const RING_COUNT: usize = 6;

/// Innermost ring radius for minor stars orbiting a planet, in pixels.
pub const MINOR_ORBIT_BASE_RADIUS: f64 = 150.0;

/// Radius increment per ring, in pixels.
pub const MINOR_ORBIT_RING_STEP: f64 = 30.0;

/// Vertical spacing of the constellation chain, in pixels.
const CHAIN_SPACING: f64 = 110.0;

/// Ring-layout destinations around a focal point.
///
/// Slot `i` sits at angle `i * 137.5°` and radius
/// `base_radius + (i mod RING_COUNT) * ring_step`. Deterministic given inputs.
pub fn compute_orbit_targets(
    center: Point,
    count: usize,
    base_radius: f64,
    ring_step: f64,
) -> Vec<Point> {
    (0..count)
        .map(|i| orbit_slot(center, i, base_radius, ring_step))
        .collect()
}

fn orbit_slot(center: Point, index: usize, base_radius: f64, ring_step: f64) -> Point {
    let angle = ((index as f64 * GOLDEN_ANGLE_DEG) % 360.0).to_radians();
    let radius = base_radius + (index % RING_COUNT) as f64 * ring_step;
    Point::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}

/// Per-entity stagger for the swirl-into-orbit animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitMotion {
    pub delay: Millis,
    pub duration: Millis,
}

/// Stagger values observed per entity index: delays cycle through five 100ms
/// slots, durations through three 200ms slots starting at 1200ms.
pub fn orbit_motion(index: usize) -> OrbitMotion {
    OrbitMotion {
        delay: Millis((index % 5) as u64 * 100),
        duration: Millis(1200 + (index % 3) as u64 * 200),
    }
}

/// Reveal delay for the constellation line at `index`.
pub fn line_reveal_delay(index: usize) -> Millis {
    Millis(index as u64 * 100)
}

/// Fixed screen anchors for the two planets in the mutuals scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetAnchors {
    /// Left planet, grown from the clicked star.
    pub focal: Point,
    /// Right planet, revealed after the focal one.
    pub companion: Point,
}

impl PlanetAnchors {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let viewport = viewport.or_fallback();
        let w = f64::from(viewport.width);
        let h = f64::from(viewport.height);
        Self {
            focal: Point::new(w * 0.27, h * 0.5),
            companion: Point::new(w * 0.73, h * 0.5),
        }
    }

    /// Midpoint between the two planets; the constellation chain hangs here.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.focal.x + self.companion.x) / 2.0,
            (self.focal.y + self.companion.y) / 2.0,
        )
    }

    /// Planet a minor star at `index` orbits; even indices take the focal
    /// planet, odd ones the companion.
    pub fn minor_host(&self, index: usize) -> Point {
        if index % 2 == 0 { self.focal } else { self.companion }
    }
}

/// Destination of a minor star swirling into orbit around its host planet.
pub fn minor_orbit_target(index: usize, anchors: &PlanetAnchors) -> Point {
    orbit_slot(
        anchors.minor_host(index),
        index,
        MINOR_ORBIT_BASE_RADIUS,
        MINOR_ORBIT_RING_STEP,
    )
}

/// Places large stars on an organic vertical chain between the two planets.
///
/// `ids` are the stars' stable layout ids; the per-id golden-angle jitter
/// keeps the pattern varied but reproducible. Chain order follows slice order.
pub fn constellation_positions(ids: &[u32], anchors: &PlanetAnchors) -> Vec<Point> {
    let center = anchors.midpoint();
    let count = ids.len();

    ids.iter()
        .enumerate()
        .map(|(chain_index, &id)| {
            let jitter = f64::from(id) * GOLDEN_ANGLE_DEG;
            let jitter_x = jitter.sin() * 100.0;
            let jitter_y = jitter.cos() * 80.0;

            if count <= 1 {
                return Point::new(center.x + jitter_x * 0.5, center.y + jitter_y * 0.3);
            }

            let progress = chain_index as f64 / (count - 1) as f64;
            let total_height = (count - 1) as f64 * CHAIN_SPACING;
            let base_y = center.y - total_height / 2.0 + chain_index as f64 * CHAIN_SPACING;

            let primary_curve = (progress * std::f64::consts::PI * 1.5).sin() * 75.0;
            let secondary_curve = (progress * std::f64::consts::PI * 2.3).cos() * 40.0;

            Point::new(
                center.x + primary_curve + secondary_curve + jitter_x * 0.3,
                base_y + jitter_y * 0.15,
            )
        })
        .collect()
}

/// Minimum pixel distance before a cross-link is considered.
const CROSS_LINK_MIN: f64 = 100.0;

/// Maximum pixel distance for a cross-link.
const CROSS_LINK_MAX: f64 = 300.0;

/// Connect constellation stars the way real constellations read: a chain
/// through the stars sorted top-to-bottom, plus at most one cross-link per
/// star to a non-adjacent neighbor at a comfortable distance.
pub fn constellation_lines(points: &[Point]) -> Vec<(Point, Point)> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y));

    let n = sorted.len();
    if n < 2 {
        return Vec::new();
    }

    let mut edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();

    if n >= 4 {
        for i in 0..n {
            let candidate = (0..n)
                .filter(|&j| j != i && j.abs_diff(i) > 1)
                .map(|j| (j, sorted[i].distance(sorted[j])))
                .filter(|&(_, d)| (CROSS_LINK_MIN..CROSS_LINK_MAX).contains(&d))
                .min_by(|a, b| a.1.total_cmp(&b.1));

            if let Some((j, _)) = candidate {
                let edge = (i.min(j), i.max(j));
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        }
    }

    edges
        .into_iter()
        .map(|(a, b)| (sorted[a], sorted[b]))
        .collect()
}
