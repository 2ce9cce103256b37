use crate::core::NormPoint;

/// Connection-degree classification driving an entity's rendered size category.
///
/// Primary and Secondary entities render as a glyph silhouette with a glow;
/// Minor entities render as a plain dot marker.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Tier {
    Primary,
    Secondary,
    Minor,
}

impl Tier {
    /// Classify a connection degree: 1 is Primary, 2 is Secondary, 3+ is Minor.
    pub fn from_degree(degree: u32) -> Tier {
        match degree {
            0 | 1 => Tier::Primary,
            2 => Tier::Secondary,
            _ => Tier::Minor,
        }
    }

    /// Rendered size range in pixels as `[min, max)`; Minor is a fixed dot.
    pub fn size_range(self) -> (f64, f64) {
        match self {
            Tier::Primary => (40.0, 60.0),
            Tier::Secondary => (25.0, 40.0),
            Tier::Minor => (MINOR_DOT_SIZE, MINOR_DOT_SIZE),
        }
    }

    /// Years-of-connection range as an inclusive `[min, max]`.
    pub fn years_range(self) -> (u32, u32) {
        match self {
            Tier::Primary => (5, 7),
            Tier::Secondary => (3, 4),
            Tier::Minor => (1, 2),
        }
    }

    /// Whether the tier renders the glyph silhouette rather than a dot.
    pub fn is_glyph(self) -> bool {
        !matches!(self, Tier::Minor)
    }
}

/// Fixed diameter for Minor-tier dot markers.
pub const MINOR_DOT_SIZE: f64 = 4.0;

/// Glow radius per pixel of entity size.
pub const GLOW_PER_PIXEL: f64 = 0.4;

/// Ordinal label for a connection degree, e.g. "2nd Degree Connection".
pub fn degree_label(degree: u32) -> String {
    let suffix = match degree {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{degree}{suffix} Degree Connection")
}

/// Structured public counts attached to a profile record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub tweet_count: u64,
    #[serde(default)]
    pub listed_count: u64,
}

/// External profile record an entity may represent.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Subject {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub bio: String,
    /// Connection degree, 1-based.
    pub degree: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<PublicMetrics>,
}

impl Subject {
    pub fn tier(&self) -> Tier {
        Tier::from_degree(self.degree)
    }
}

/// Layout input: a decorative point, optionally tied to a profile record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    /// Stable index-based identifier.
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
}

impl Entity {
    pub fn decorative(id: u32) -> Self {
        Self { id, subject: None }
    }

    pub fn for_subject(id: u32, subject: Subject) -> Self {
        Self {
            id,
            subject: Some(subject),
        }
    }

    pub fn tier(&self) -> Tier {
        self.subject.as_ref().map_or(Tier::Minor, Subject::tier)
    }
}

/// Layout output: an entity with position and tier-derived visual attributes.
///
/// `years` is sampled once at generation time and frozen for the entity's
/// lifetime in the scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PositionedEntity {
    pub id: u32,
    pub position: NormPoint,
    pub tier: Tier,
    /// Rendered diameter in pixels.
    pub size: f64,
    /// Glow radius in pixels, scales with `size`.
    pub glow_radius: f64,
    /// Years of connection, derived from tier.
    pub years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
}
