//! Scene descriptions and per-scene choreography.
//!
//! Each screen of the visualizer gets a phase enum (one value, never a pile
//! of independent booleans, so invalid combinations like "settled but also
//! exiting" cannot be represented) and a pair of scripts with the observed
//! offsets. The [`SceneBuilder`] assembles subjects and layout options into
//! a serializable [`Scene`] the rendering layer can consume directly.

use crate::{
    core::{Millis, Point, Rect, Viewport},
    ease::Ease,
    error::OrreryResult,
    layout::{LayoutOptions, layout_entities},
    model::{Entity, PositionedEntity, Subject},
    orbit::PlanetAnchors,
    sequence::{Script, Sequencer, Step},
};

/// Phase of the mutual-connections overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MutualsPhase {
    Hidden,
    /// Focal planet growing out of the clicked star.
    FocalEntering,
    /// Stars swirling toward their orbit targets.
    StarsShifting,
    /// Companion planet revealed on the right.
    CompanionVisible,
    /// Constellation lines drawn between the large stars.
    ConstellationVisible,
}

/// Sequencer for the mutuals overlay: focal planet at once, stars at 300ms,
/// companion at 600ms, constellation at 1500ms; the reverse run hides the
/// constellation immediately and finishes at 2000ms.
pub fn mutuals_sequencer() -> Sequencer<MutualsPhase> {
    let forward = Script::from_sorted(vec![
        Step {
            at: Millis(0),
            phase: MutualsPhase::FocalEntering,
        },
        Step {
            at: Millis(300),
            phase: MutualsPhase::StarsShifting,
        },
        Step {
            at: Millis(600),
            phase: MutualsPhase::CompanionVisible,
        },
        Step {
            at: Millis(1500),
            phase: MutualsPhase::ConstellationVisible,
        },
    ]);
    let reverse = Script::from_sorted(vec![
        Step {
            at: Millis(0),
            phase: MutualsPhase::StarsShifting,
        },
        Step {
            at: Millis(2000),
            phase: MutualsPhase::Hidden,
        },
    ]);
    Sequencer::new(MutualsPhase::Hidden, forward, reverse)
}

/// Phase of the profile overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ProfilePhase {
    Hidden,
    /// Globe travelling from the clicked star to the left panel.
    GlobeEntering,
    /// Profile card revealed once the globe has landed.
    ContentVisible,
}

/// Sequencer for the profile overlay: globe at once, content at 1200ms;
/// the reverse run finishes at 600ms.
pub fn profile_sequencer() -> Sequencer<ProfilePhase> {
    let forward = Script::from_sorted(vec![
        Step {
            at: Millis(0),
            phase: ProfilePhase::GlobeEntering,
        },
        Step {
            at: Millis(1200),
            phase: ProfilePhase::ContentVisible,
        },
    ]);
    let reverse = Script::from_sorted(vec![
        Step {
            at: Millis(0),
            phase: ProfilePhase::GlobeEntering,
        },
        Step {
            at: Millis(600),
            phase: ProfilePhase::Hidden,
        },
    ]);
    Sequencer::new(ProfilePhase::Hidden, forward, reverse)
}

/// Start→end interpolation for a focal element growing from a clicked point
/// to its destination anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FocalTravel {
    pub origin: Point,
    pub target: Point,
    pub ease: Ease,
}

impl FocalTravel {
    pub fn new(origin: Point, target: Point) -> Self {
        Self {
            origin,
            target,
            ease: Ease::InOutCubic,
        }
    }

    /// Position at progress `t` in `[0, 1]`.
    pub fn at(&self, t: f64) -> Point {
        let t = self.ease.apply(t);
        Point::new(
            self.origin.x + (self.target.x - self.origin.x) * t,
            self.origin.y + (self.target.y - self.origin.y) * t,
        )
    }
}

/// Which side of the entity the hover card opens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TooltipSide {
    Above,
    Below,
}

/// Hover-card anchor for an entity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TooltipAnchor {
    pub at: Point,
    pub side: TooltipSide,
}

/// Entities in the top fifth of the viewport flip the card below so it never
/// clips off-screen; otherwise it opens above.
pub fn tooltip_anchor(entity_bounds: Rect, viewport: Viewport) -> TooltipAnchor {
    let viewport = viewport.or_fallback();
    let top_percent = entity_bounds.y0 / f64::from(viewport.height) * 100.0;
    let x = (entity_bounds.x0 + entity_bounds.x1) / 2.0;

    if top_percent < 20.0 {
        TooltipAnchor {
            at: Point::new(x, entity_bounds.y1 + 10.0),
            side: TooltipSide::Below,
        }
    } else {
        TooltipAnchor {
            at: Point::new(x, entity_bounds.y0 - 10.0),
            side: TooltipSide::Above,
        }
    }
}

/// A fully laid-out scene ready for the rendering layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub seed: u64,
    pub entities: Vec<PositionedEntity>,
}

impl Scene {
    /// Planet anchors for this scene's viewport.
    pub fn planet_anchors(&self) -> PlanetAnchors {
        PlanetAnchors::for_viewport(self.viewport)
    }
}

/// Assembles subjects and layout options into a [`Scene`].
pub struct SceneBuilder {
    viewport: Viewport,
    seed: u64,
    margin: f64,
    bottom_margin: f64,
    subjects: Vec<Subject>,
}

impl SceneBuilder {
    pub fn new(viewport: Viewport) -> Self {
        let defaults = LayoutOptions::default();
        Self {
            viewport,
            seed: 0,
            margin: defaults.margin,
            bottom_margin: defaults.bottom_margin,
            subjects: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn bottom_margin(mut self, bottom_margin: f64) -> Self {
        self.bottom_margin = bottom_margin;
        self
    }

    pub fn subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    pub fn subjects(mut self, subjects: impl IntoIterator<Item = Subject>) -> Self {
        self.subjects.extend(subjects);
        self
    }

    pub fn build(self) -> OrreryResult<Scene> {
        let options = LayoutOptions {
            margin: self.margin,
            bottom_margin: self.bottom_margin,
            viewport: self.viewport.or_fallback(),
            seed: self.seed,
        };
        let entities: Vec<Entity> = self
            .subjects
            .into_iter()
            .enumerate()
            .map(|(i, subject)| Entity::for_subject(i as u32, subject))
            .collect();
        let entities = layout_entities(&entities, &options)?;
        Ok(Scene {
            viewport: options.viewport,
            seed: self.seed,
            entities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;

    fn subject(name: &str, degree: u32) -> Subject {
        Subject {
            username: name.to_string(),
            display_name: None,
            profile_image_url: None,
            bio: String::new(),
            degree,
            public_metrics: None,
        }
    }

    #[test]
    fn mutuals_forward_walks_every_phase() {
        let mut seq = mutuals_sequencer();
        seq.open(Millis(0));
        assert_eq!(seq.poll(Millis(0)), vec![MutualsPhase::FocalEntering]);
        assert_eq!(seq.poll(Millis(300)), vec![MutualsPhase::StarsShifting]);
        assert_eq!(seq.poll(Millis(600)), vec![MutualsPhase::CompanionVisible]);
        assert_eq!(
            seq.poll(Millis(1500)),
            vec![MutualsPhase::ConstellationVisible]
        );
        assert!(seq.is_settled());
    }

    #[test]
    fn mutuals_reverse_hides_constellation_first() {
        let mut seq = mutuals_sequencer();
        seq.open(Millis(0));
        seq.poll(Millis(1500));
        seq.close(Millis(2000));
        assert_eq!(seq.poll(Millis(2000)), vec![MutualsPhase::StarsShifting]);
        assert_eq!(seq.poll(Millis(4000)), vec![MutualsPhase::Hidden]);
        assert!(seq.is_idle());
    }

    #[test]
    fn profile_content_waits_for_the_globe() {
        let mut seq = profile_sequencer();
        seq.open(Millis(100));
        assert_eq!(seq.poll(Millis(100)), vec![ProfilePhase::GlobeEntering]);
        assert!(seq.poll(Millis(1200)).is_empty());
        assert_eq!(seq.poll(Millis(1300)), vec![ProfilePhase::ContentVisible]);
    }

    #[test]
    fn focal_travel_hits_both_endpoints() {
        let travel = FocalTravel::new(Point::new(100.0, 100.0), Point::new(500.0, 300.0));
        assert_eq!(travel.at(0.0), Point::new(100.0, 100.0));
        assert_eq!(travel.at(1.0), Point::new(500.0, 300.0));
        let mid = travel.at(0.5);
        assert!(mid.x > 100.0 && mid.x < 500.0);
    }

    #[test]
    fn tooltip_flips_below_near_the_top() {
        let viewport = Viewport::new(1000, 1000);
        let high = Rect::new(480.0, 100.0, 520.0, 140.0);
        let anchor = tooltip_anchor(high, viewport);
        assert_eq!(anchor.side, TooltipSide::Below);
        assert_eq!(anchor.at, Point::new(500.0, 150.0));

        let low = Rect::new(480.0, 600.0, 520.0, 640.0);
        let anchor = tooltip_anchor(low, viewport);
        assert_eq!(anchor.side, TooltipSide::Above);
        assert_eq!(anchor.at, Point::new(500.0, 590.0));
    }

    #[test]
    fn builder_lays_out_subjects_in_order() {
        let scene = SceneBuilder::new(Viewport::new(1280, 720))
            .seed(42)
            .subject(subject("alice", 1))
            .subject(subject("bob", 2))
            .subject(subject("eve", 3))
            .build()
            .unwrap();
        assert_eq!(scene.entities.len(), 3);
        assert_eq!(scene.entities[0].tier, Tier::Primary);
        assert_eq!(scene.entities[1].tier, Tier::Secondary);
        assert_eq!(scene.entities[2].tier, Tier::Minor);
        assert_eq!(
            scene.entities[0].subject.as_ref().map(|s| s.username.as_str()),
            Some("alice")
        );
    }

    #[test]
    fn builder_falls_back_on_zero_viewport() {
        let scene = SceneBuilder::new(Viewport::new(0, 0)).build().unwrap();
        assert_eq!(scene.viewport, Viewport::FALLBACK);
    }

    #[test]
    fn scene_serializes_round_trip() {
        let scene = SceneBuilder::new(Viewport::new(800, 600))
            .seed(7)
            .subject(subject("diana", 2))
            .build()
            .unwrap();
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, back);
    }
}
