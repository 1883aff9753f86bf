use super::*;
use chrono::TimeZone;

fn sample_json() -> &'static str {
    r#"{
        "id": "a1",
        "text": "городок",
        "created_at": "2026-08-06T10:30:00Z",
        "moderation_status": "blocked",
        "block_reason": "Неинтересный"
    }"#
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn deserializes_a_blocked_record() {
    let item: HistoryItem = serde_json::from_str(sample_json()).expect("valid record");
    assert_eq!(item.id, "a1");
    assert_eq!(item.text, "городок");
    assert_eq!(item.moderation_status, ModerationStatus::Blocked);
    assert_eq!(item.block_reason.as_deref(), Some("Неинтересный"));
    assert_eq!(
        item.created_at,
        Utc.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap()
    );
}

#[test]
fn block_reason_null_maps_to_none() {
    let json = r#"{
        "id": "a2",
        "text": "dnjskh",
        "created_at": "2026-08-06T09:00:00Z",
        "moderation_status": "pending",
        "block_reason": null
    }"#;
    let item: HistoryItem = serde_json::from_str(json).expect("valid record");
    assert_eq!(item.moderation_status, ModerationStatus::Pending);
    assert_eq!(item.block_reason, None);
}

#[test]
fn block_reason_defaults_to_none_when_absent() {
    let json = r#"{
        "id": "a3",
        "text": "ещё один пост",
        "created_at": "2026-08-06T08:00:00Z",
        "moderation_status": "pending"
    }"#;
    let item: HistoryItem = serde_json::from_str(json).expect("valid record");
    assert_eq!(item.block_reason, None);
}

#[test]
fn statuses_serialize_lowercase() {
    assert_eq!(
        serde_json::to_string(&ModerationStatus::Pending).unwrap(),
        r#""pending""#
    );
    assert_eq!(
        serde_json::to_string(&ModerationStatus::Blocked).unwrap(),
        r#""blocked""#
    );
}

#[test]
fn unknown_status_is_rejected() {
    let result: Result<ModerationStatus, _> = serde_json::from_str(r#""published""#);
    assert!(result.is_err());
}

#[test]
fn round_trips_through_json() {
    let item: HistoryItem = serde_json::from_str(sample_json()).unwrap();
    let encoded = serde_json::to_string(&item).unwrap();
    let decoded: HistoryItem = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, item);
}
