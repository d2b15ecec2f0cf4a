use communityhub_core::{
    search_communities, validate_seed, CommunityId, DomainStore, JsonSeed, MockSeed, SeedData,
    SeedError, SeedSource, StoreConfig, UserId,
};
use serde_json::json;
use std::io::Write;

fn minimal_seed() -> serde_json::Value {
    json!({
        "current_user": "u1",
        "users": [
            {
                "id": "u1",
                "display_name": "Ada",
                "handle": "@ada",
                "joined_at": 500,
                "joined_communities": ["c1"]
            },
            { "id": "u2", "display_name": "Bo", "handle": "bo@example.com", "joined_at": 600 }
        ],
        "communities": [
            {
                "id": "c1",
                "name": "Rustaceans",
                "members": ["u1"],
                "posts": [
                    {
                        "id": "p1",
                        "author_id": "u2",
                        "content": "first",
                        "created_at": 1000,
                        "comments": [
                            { "id": "k1", "author_id": "u1", "content": "hi", "created_at": 2000 }
                        ]
                    }
                ],
                "events": [
                    {
                        "id": "e1",
                        "title": "Meetup",
                        "scheduled_at": 3000,
                        "organizer_id": "u1",
                        "attendees": ["u1"]
                    }
                ]
            }
        ]
    })
}

fn load(value: serde_json::Value) -> Result<SeedData, SeedError> {
    JsonSeed::from_json_str(value.to_string()).load()
}

#[test]
fn json_seed_fills_defaults_for_optional_fields() {
    let seed = load(minimal_seed()).expect("minimal seed should parse");
    validate_seed(&seed).expect("minimal seed should validate");

    let bo = &seed.users[1];
    assert_eq!(bo.avatar, None);
    assert_eq!(bo.bio, None);
    assert_eq!(bo.location, None);
    assert_eq!(bo.joined_at, 600);
    assert!(bo.joined_communities.is_empty());

    let community = &seed.communities[0];
    assert_eq!(community.description, "");
    assert!(community.posts[0].likes.is_empty());
    assert_eq!(community.events[0].location, None);
}

#[test]
fn store_starts_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    file.write_all(minimal_seed().to_string().as_bytes()).expect("seed should be written");

    let mut store =
        DomainStore::from_seed(&JsonSeed::from_path(file.path()), StoreConfig::default())
            .expect("json seed should load");
    let outcome = store
        .join_community(&CommunityId::new("c1"), &UserId::new("u2"))
        .expect("join should succeed");

    assert_eq!(outcome, communityhub_core::JoinOutcome::Joined);
    let snapshot = store.snapshot();
    let ada = snapshot.current_user().expect("u1 should be signed in");
    assert_eq!(ada.display_name, "Ada");
    assert_eq!(search_communities(&snapshot, "rust")[0].member_count, 2);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("absent.json");

    let err = JsonSeed::from_path(&path)
        .load()
        .expect_err("missing file must fail to load");

    match err {
        SeedError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_json_reports_json_error() {
    let err = JsonSeed::from_json_str("{ not json")
        .load()
        .expect_err("malformed json must fail to load");
    assert!(matches!(err, SeedError::Json(_)));
}

#[test]
fn duplicate_post_ids_are_rejected() {
    let mut value = minimal_seed();
    let posts = value["communities"][0]["posts"]
        .as_array_mut()
        .expect("posts should be an array");
    let copy = posts[0].clone();
    posts.push(copy);

    let seed = load(value).expect("edited seed should parse");
    let err = validate_seed(&seed).expect_err("edited seed must fail validation");
    assert!(
        matches!(err, SeedError::DuplicateId { collection: "posts", ref id } if id == "p1"),
        "unexpected error: {err}"
    );
}

#[test]
fn dangling_author_is_rejected() {
    let mut value = minimal_seed();
    value["communities"][0]["posts"][0]["author_id"] = json!("ghost");

    let seed = load(value).expect("edited seed should parse");
    let err = validate_seed(&seed).expect_err("edited seed must fail validation");
    assert!(
        matches!(err, SeedError::UnknownUser { context: "post author", .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn one_sided_membership_is_rejected() {
    let mut value = minimal_seed();
    value["communities"][0]["members"] = json!(["u1", "u2"]);

    let seed = load(value).expect("edited seed should parse");
    let err = validate_seed(&seed).expect_err("edited seed must fail validation");
    assert!(
        matches!(
            err,
            SeedError::InconsistentMembership { ref user_id, .. } if user_id == "u2"
        ),
        "unexpected error: {err}"
    );
}

#[test]
fn joined_unknown_community_is_rejected() {
    let mut value = minimal_seed();
    value["users"][1]["joined_communities"] = json!(["c9"]);

    let seed = load(value).expect("edited seed should parse");
    let err = validate_seed(&seed).expect_err("edited seed must fail validation");
    assert!(matches!(err, SeedError::UnknownCommunity { .. }), "unexpected error: {err}");
}

#[test]
fn malformed_handle_is_rejected() {
    let mut value = minimal_seed();
    value["users"][0]["handle"] = json!("ada");

    let seed = load(value).expect("edited seed should parse");
    let err = validate_seed(&seed).expect_err("edited seed must fail validation");
    assert!(matches!(err, SeedError::InvalidHandle { .. }), "unexpected error: {err}");
}

#[test]
fn store_refuses_invalid_seed() {
    let mut value = minimal_seed();
    value["current_user"] = json!("nobody");

    let source = JsonSeed::from_json_str(value.to_string());
    let result = DomainStore::from_seed(&source, StoreConfig::default());

    assert!(matches!(
        result,
        Err(SeedError::UnknownUser { context: "current_user", .. })
    ));
}

#[test]
fn mock_seed_matches_documented_shape() {
    let store =
        DomainStore::from_seed(&MockSeed, StoreConfig::default()).expect("mock seed should load");
    let snapshot = store.snapshot();

    assert_eq!(snapshot.current_user, Some(UserId::new("user1")));
    let react = snapshot
        .community(&CommunityId::new("comm1"))
        .expect("comm1 should exist");
    assert_eq!(react.name, "React Developers");
    assert_eq!(react.posts.len(), 1);
    assert_eq!(react.posts[0].id, "post1");
    assert!(react.posts[0].likes.is_empty());

    let joined: Vec<&str> = snapshot
        .joined_communities(&UserId::new("user1"))
        .iter()
        .map(|community| community.id.as_str())
        .collect();
    assert_eq!(joined, vec!["comm1"]);
}
