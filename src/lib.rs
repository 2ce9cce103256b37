//! Deterministic star-field layout and scene-transition sequencing for a
//! social-universe visualizer. The crate produces scene descriptions —
//! positioned entities, orbit and constellation geometry, timed phase
//! schedules, rotation state — that a rendering layer maps to visuals; it
//! performs no rendering itself.

#![forbid(unsafe_code)]

pub mod core;
pub mod ease;
pub mod error;
pub mod feed;
pub mod handle;
pub mod layout;
pub mod model;
pub mod orbit;
pub mod rotation;
pub mod scene;
pub mod sequence;

pub use self::core::{Millis, NormPoint, Point, Rect, Vec2, Viewport};
pub use ease::Ease;
pub use error::{OrreryError, OrreryResult};
pub use layout::{LayoutOptions, background_field, layout_entities};
pub use model::{Entity, PositionedEntity, Subject, Tier};
pub use orbit::{PlanetAnchors, compute_orbit_targets};
pub use rotation::Spin;
pub use scene::{MutualsPhase, ProfilePhase, Scene, SceneBuilder};
pub use sequence::{Script, Sequencer, Step};
