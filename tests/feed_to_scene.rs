use orrery::{
    SceneBuilder, Tier, Viewport,
    feed::{parse_mutuals, parse_mutuals_or_empty, subjects_from_mutuals},
};

#[test]
fn json_fixture_parses_and_maps() {
    let s = include_str!("data/mutuals_response.json");
    let response = parse_mutuals(s).unwrap();
    assert_eq!(response.mutual_count, 3);
    assert_eq!(response.user1.username, "alice");

    let subjects = subjects_from_mutuals(&response);
    assert_eq!(subjects.len(), 3);
    for subject in &subjects {
        assert_eq!(subject.tier(), Tier::Secondary);
    }
    // Fields missing from the payload default instead of failing.
    assert_eq!(subjects[2].bio, "");
    assert!(subjects[2].profile_image_url.is_none());
}

#[test]
fn fixture_builds_a_bounded_scene() {
    let s = include_str!("data/mutuals_response.json");
    let scene = SceneBuilder::new(Viewport::new(1440, 900))
        .seed(11)
        .subjects(parse_mutuals_or_empty(s))
        .build()
        .unwrap();

    assert_eq!(scene.entities.len(), 3);
    for star in &scene.entities {
        assert_eq!(star.tier, Tier::Secondary);
        assert!(star.size >= 25.0 && star.size < 40.0);
        assert!(star.position.top >= 8.0 && star.position.top <= 67.0);
        assert!(star.position.left >= 8.0 && star.position.left <= 92.0);
    }
}

#[test]
fn truncated_fixture_degrades_to_an_empty_scene() {
    let s = include_str!("data/mutuals_response.json");
    let truncated = &s[..s.len() / 2];
    let subjects = parse_mutuals_or_empty(truncated);
    assert!(subjects.is_empty());

    let scene = SceneBuilder::new(Viewport::new(1440, 900))
        .subjects(subjects)
        .build()
        .unwrap();
    assert!(scene.entities.is_empty());
}
