use super::*;

fn chess_club() -> Activity {
    Activity {
        description: "Learn strategies and compete in chess tournaments".to_owned(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_owned(),
        max_participants: 10,
        participants: vec!["a@x.com".to_owned()],
    }
}

// =============================================================
// Spots-left arithmetic
// =============================================================

#[test]
fn spots_left_subtracts_roster_from_capacity() {
    assert_eq!(chess_club().spots_left(), 9);
}

#[test]
fn spots_left_is_zero_when_full() {
    let mut activity = chess_club();
    activity.max_participants = 1;
    assert_eq!(activity.spots_left(), 0);
}

#[test]
fn spots_left_saturates_for_overfull_roster() {
    let mut activity = chess_club();
    activity.max_participants = 2;
    activity.participants = vec![
        "a@x.com".to_owned(),
        "b@x.com".to_owned(),
        "c@x.com".to_owned(),
    ];
    assert_eq!(activity.spots_left(), 0);
}

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn activity_map_decodes_listing_payload() {
    let json = r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 10,
            "participants": ["a@x.com"]
        }
    }"#;
    let map: ActivityMap = serde_json::from_str(json).unwrap();

    let activity = &map["Chess Club"];
    assert_eq!(activity.max_participants, 10);
    assert_eq!(activity.participants, vec!["a@x.com"]);
    assert_eq!(activity.spots_left(), 9);
}

#[test]
fn activity_preserves_participant_order() {
    let json = r#"{
        "description": "Physical education and sports activities",
        "schedule": "Mondays, 2:00 PM - 3:00 PM",
        "max_participants": 30,
        "participants": ["john@mergington.edu", "olivia@mergington.edu"]
    }"#;
    let activity: Activity = serde_json::from_str(json).unwrap();
    assert_eq!(
        activity.participants,
        vec!["john@mergington.edu", "olivia@mergington.edu"]
    );
}

#[test]
fn message_response_decodes_confirmation() {
    let body: MessageResponse = serde_json::from_str(r#"{"message":"Signed up!"}"#).unwrap();
    assert_eq!(body.message, "Signed up!");
}

#[test]
fn error_response_decodes_detail() {
    let body: ErrorResponse = serde_json::from_str(r#"{"detail":"Activity full"}"#).unwrap();
    assert_eq!(body.detail.as_deref(), Some("Activity full"));
}

#[test]
fn error_response_tolerates_missing_detail() {
    let body: ErrorResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body.detail, None);
}
