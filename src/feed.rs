//! Inbound shapes from the external profile/connection lookup.
//!
//! Two shapes are consumed: a friends collection where every entry carries
//! its own connection degree, and a mutuals query between two named subjects
//! where every shared subject counts as 2nd degree. Parsing is lenient at
//! the scene boundary: a malformed payload degrades to an empty subject
//! list (and a warning) instead of halting the screen.

use crate::{
    error::{OrreryError, OrreryResult},
    model::{PublicMetrics, Subject},
};

/// One profile record as returned by the lookup service.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<PublicMetrics>,
}

/// Mutual connections between two named subjects.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MutualsResponse {
    pub user1: UserProfile,
    pub user2: UserProfile,
    pub mutuals: Vec<UserProfile>,
    #[serde(default)]
    pub mutual_count: usize,
}

/// A friends-collection entry: a profile plus its connection degree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FriendProfile {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub degree: u32,
}

/// The friends-collection response shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FriendsResponse {
    pub friends: Vec<FriendProfile>,
}

/// Every mutual is a 2nd degree connection.
pub const MUTUAL_DEGREE: u32 = 2;

fn subject_from_profile(profile: &UserProfile, degree: u32) -> Subject {
    Subject {
        username: profile.username.clone(),
        display_name: profile.name.clone(),
        profile_image_url: profile.profile_image_url.clone(),
        bio: profile.description.clone(),
        degree,
        public_metrics: profile.public_metrics,
    }
}

/// Map a mutuals response to scene subjects, all tagged 2nd degree.
pub fn subjects_from_mutuals(response: &MutualsResponse) -> Vec<Subject> {
    response
        .mutuals
        .iter()
        .map(|p| subject_from_profile(p, MUTUAL_DEGREE))
        .collect()
}

/// Map a friends response to scene subjects, keeping per-entry degrees.
pub fn subjects_from_friends(response: &FriendsResponse) -> Vec<Subject> {
    response
        .friends
        .iter()
        .map(|f| subject_from_profile(&f.profile, f.degree))
        .collect()
}

pub fn parse_mutuals(json: &str) -> OrreryResult<MutualsResponse> {
    serde_json::from_str(json).map_err(|e| OrreryError::serde(format!("mutuals response: {e}")))
}

pub fn parse_friends(json: &str) -> OrreryResult<FriendsResponse> {
    serde_json::from_str(json).map_err(|e| OrreryError::serde(format!("friends response: {e}")))
}

/// Lenient entry point for the mutuals scene: a malformed payload yields an
/// empty subject list and the screen renders with zero entities.
pub fn parse_mutuals_or_empty(json: &str) -> Vec<Subject> {
    match parse_mutuals(json) {
        Ok(response) => subjects_from_mutuals(&response),
        Err(err) => {
            tracing::warn!(%err, "mutuals lookup failed, rendering empty scene");
            Vec::new()
        }
    }
}

/// Lenient entry point for the friends universe.
pub fn parse_friends_or_empty(json: &str) -> Vec<Subject> {
    match parse_friends(json) {
        Ok(response) => subjects_from_friends(&response),
        Err(err) => {
            tracing::warn!(%err, "friends lookup failed, rendering empty scene");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tier;

    const MUTUALS_JSON: &str = r#"{
        "user1": {"id": "1", "name": "Alice", "username": "alice"},
        "user2": {"id": "2", "name": "Bob", "username": "bob"},
        "mutuals": [
            {
                "id": "3",
                "name": "Charlie",
                "username": "charlie",
                "profile_image_url": "https://example.com/c.png",
                "description": "stargazer",
                "public_metrics": {"followers_count": 120}
            },
            {"id": "4", "name": "Diana", "username": "diana"}
        ],
        "mutual_count": 2
    }"#;

    #[test]
    fn mutuals_parse_and_map_to_second_degree() {
        let subjects = parse_mutuals_or_empty(MUTUALS_JSON);
        assert_eq!(subjects.len(), 2);
        for s in &subjects {
            assert_eq!(s.degree, MUTUAL_DEGREE);
            assert_eq!(s.tier(), Tier::Secondary);
        }
        assert_eq!(subjects[0].username, "charlie");
        assert_eq!(subjects[0].bio, "stargazer");
        assert_eq!(
            subjects[0].public_metrics.map(|m| m.followers_count),
            Some(120)
        );
        // Missing description defaults to empty rather than failing.
        assert_eq!(subjects[1].bio, "");
    }

    #[test]
    fn malformed_payload_degrades_to_empty() {
        assert!(parse_mutuals_or_empty("not json").is_empty());
        assert!(parse_mutuals_or_empty(r#"{"mutuals": []}"#).is_empty());
        assert!(parse_friends_or_empty("[oops").is_empty());
    }

    #[test]
    fn friends_keep_their_own_degrees() {
        let json = r#"{
            "friends": [
                {"id": "1", "username": "alice", "degree": 1},
                {"id": "2", "username": "bob", "degree": 2},
                {"id": "3", "username": "eve", "degree": 4}
            ]
        }"#;
        let subjects = subjects_from_friends(&parse_friends(json).unwrap());
        assert_eq!(subjects.len(), 3);
        assert_eq!(subjects[0].tier(), Tier::Primary);
        assert_eq!(subjects[1].tier(), Tier::Secondary);
        assert_eq!(subjects[2].tier(), Tier::Minor);
    }
}
