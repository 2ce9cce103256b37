use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    core::{NormPoint, Viewport, stable_hash64},
    error::{OrreryError, OrreryResult},
    model::{Entity, GLOW_PER_PIXEL, PositionedEntity},
};

/// Number of backdrop dots on the landing page.
pub const BACKGROUND_STAR_COUNT: usize = 80;

/// Placement parameters for [`layout_entities`].
///
/// Margins are percentage insets from each edge. `bottom_margin` is an extra
/// inset from the bottom edge, used when a bottom-anchored control (the return
/// button) must stay clear of entities.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct LayoutOptions {
    pub margin: f64,
    pub bottom_margin: f64,
    pub viewport: Viewport,
    /// Determinism seed; tests pass a fixed value, production call sites may
    /// derive one from time.
    pub seed: u64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin: 8.0,
            bottom_margin: 25.0,
            viewport: Viewport::FALLBACK,
            seed: 0,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> OrreryResult<()> {
        if !(0.0..50.0).contains(&self.margin) {
            return Err(OrreryError::validation("margin must be in [0, 50)"));
        }
        if !(0.0..50.0).contains(&self.bottom_margin) {
            return Err(OrreryError::validation("bottom_margin must be in [0, 50)"));
        }
        if self.margin * 2.0 + self.bottom_margin >= 100.0 {
            return Err(OrreryError::validation(
                "margins leave no vertical span for placement",
            ));
        }
        Ok(())
    }
}

/// Assign boundary-respecting positions and tier-derived visual attributes.
///
/// Returns exactly one output per input entity. Draws are keyed off a stable
/// per-id sub-seed, so adding an entity does not reshuffle the placements of
/// the others. Overlap between entities is accepted; there is no collision
/// resolution.
#[tracing::instrument(skip(entities), fields(count = entities.len()))]
pub fn layout_entities(
    entities: &[Entity],
    options: &LayoutOptions,
) -> OrreryResult<Vec<PositionedEntity>> {
    options.validate()?;

    let out = entities
        .iter()
        .map(|entity| place_entity(entity, options))
        .collect::<OrreryResult<Vec<_>>>()?;

    tracing::debug!(placed = out.len(), "layout complete");
    Ok(out)
}

fn place_entity(entity: &Entity, options: &LayoutOptions) -> OrreryResult<PositionedEntity> {
    let sub_seed = stable_hash64(options.seed, &format!("entity-{}", entity.id));
    let mut rng = StdRng::seed_from_u64(sub_seed);

    let top_span = 100.0 - options.margin * 2.0 - options.bottom_margin;
    let left_span = 100.0 - options.margin * 2.0;
    let top = options.margin + rng.gen_range(0.0..=1.0) * top_span;
    let left = options.margin + rng.gen_range(0.0..=1.0) * left_span;

    let tier = entity.tier();
    let size = sample_range(&mut rng, tier.size_range());
    let (y_min, y_max) = tier.years_range();
    let years = rng.gen_range(y_min..=y_max);

    Ok(PositionedEntity {
        id: entity.id,
        position: NormPoint::new(top, left)?,
        tier,
        size,
        glow_radius: size * GLOW_PER_PIXEL,
        years,
        subject: entity.subject.clone(),
    })
}

fn sample_range(rng: &mut StdRng, (min, max): (f64, f64)) -> f64 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..max)
    }
}

/// A backdrop dot with no subject and no interactivity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundStar {
    pub position: NormPoint,
    /// Diameter in pixels, 3 to 5.
    pub size: f64,
    /// Opacity in `[0.5, 1.0]`.
    pub opacity: f64,
}

/// Evenly distributed backdrop dots over the full viewport, no margins.
pub fn background_field(count: usize, seed: u64) -> Vec<BackgroundStar> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| BackgroundStar {
            position: NormPoint {
                top: rng.gen_range(0.0..100.0),
                left: rng.gen_range(0.0..100.0),
            },
            size: rng.gen_range(3.0..5.0),
            opacity: rng.gen_range(0.5..1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Subject;

    fn subject(degree: u32) -> Subject {
        Subject {
            username: format!("user{degree}"),
            display_name: None,
            profile_image_url: None,
            bio: String::new(),
            degree,
            public_metrics: None,
        }
    }

    fn mixed_entities(n: u32) -> Vec<Entity> {
        (0..n)
            .map(|i| Entity::for_subject(i, subject(i % 4 + 1)))
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = layout_entities(&[], &LayoutOptions::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn output_count_matches_input_count() {
        for n in [1u32, 7, 40] {
            let out = layout_entities(&mixed_entities(n), &LayoutOptions::default()).unwrap();
            assert_eq!(out.len(), n as usize);
        }
    }

    #[test]
    fn positions_respect_margins() {
        let options = LayoutOptions {
            margin: 8.0,
            bottom_margin: 25.0,
            ..LayoutOptions::default()
        };
        for star in layout_entities(&mixed_entities(60), &options).unwrap() {
            assert!(star.position.top >= 8.0 && star.position.top <= 67.0);
            assert!(star.position.left >= 8.0 && star.position.left <= 92.0);
        }
    }

    #[test]
    fn sizes_and_years_stay_in_tier_ranges() {
        for star in layout_entities(&mixed_entities(60), &LayoutOptions::default()).unwrap() {
            let (s_min, s_max) = star.tier.size_range();
            assert!(star.size >= s_min && star.size <= s_max);
            let (y_min, y_max) = star.tier.years_range();
            assert!(star.years >= y_min && star.years <= y_max);
            assert_eq!(star.glow_radius, star.size * GLOW_PER_PIXEL);
        }
    }

    #[test]
    fn same_seed_reproduces_layout() {
        let entities = mixed_entities(20);
        let a = layout_entities(&entities, &LayoutOptions::default()).unwrap();
        let b = layout_entities(&entities, &LayoutOptions::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_moves_entities() {
        let entities = mixed_entities(20);
        let a = layout_entities(&entities, &LayoutOptions::default()).unwrap();
        let options = LayoutOptions {
            seed: 99,
            ..LayoutOptions::default()
        };
        let b = layout_entities(&entities, &options).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn adding_an_entity_keeps_existing_placements() {
        let small = mixed_entities(5);
        let large = mixed_entities(6);
        let a = layout_entities(&small, &LayoutOptions::default()).unwrap();
        let b = layout_entities(&large, &LayoutOptions::default()).unwrap();
        assert_eq!(a[..], b[..5]);
    }

    #[test]
    fn invalid_margins_are_rejected() {
        let options = LayoutOptions {
            margin: 50.0,
            ..LayoutOptions::default()
        };
        assert!(layout_entities(&[], &options).is_err());
        let options = LayoutOptions {
            margin: 40.0,
            bottom_margin: 30.0,
            ..LayoutOptions::default()
        };
        assert!(layout_entities(&[], &options).is_err());
    }

    #[test]
    fn background_field_covers_full_viewport_range() {
        let field = background_field(BACKGROUND_STAR_COUNT, 3);
        assert_eq!(field.len(), BACKGROUND_STAR_COUNT);
        for dot in field {
            assert!(dot.position.top >= 0.0 && dot.position.top < 100.0);
            assert!(dot.position.left >= 0.0 && dot.position.left < 100.0);
            assert!(dot.size >= 3.0 && dot.size < 5.0);
            assert!(dot.opacity >= 0.5 && dot.opacity < 1.0);
        }
    }
}
