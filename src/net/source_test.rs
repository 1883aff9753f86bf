use super::*;
use chrono::TimeZone;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
}

// =============================================================
// Seeded dataset
// =============================================================

#[test]
fn seeds_three_records_newest_first() {
    let items = seeded_items(fixed_now());
    assert_eq!(items.len(), 3);
    assert!(items[0].created_at > items[1].created_at);
    assert!(items[1].created_at > items[2].created_at);
}

#[test]
fn seeded_ages_are_one_two_and_four_hours() {
    let now = fixed_now();
    let items = seeded_items(now);
    assert_eq!(items[0].created_at, now - Duration::hours(1));
    assert_eq!(items[1].created_at, now - Duration::hours(2));
    assert_eq!(items[2].created_at, now - Duration::hours(4));
}

#[test]
fn seeded_block_reason_matches_status() {
    for item in seeded_items(fixed_now()) {
        match item.moderation_status {
            ModerationStatus::Blocked => assert!(item.block_reason.is_some()),
            ModerationStatus::Pending => assert!(item.block_reason.is_none()),
        }
    }
}

#[test]
fn seeded_ids_are_unique() {
    let items = seeded_items(fixed_now());
    assert_ne!(items[0].id, items[1].id);
    assert_ne!(items[1].id, items[2].id);
    assert_ne!(items[0].id, items[2].id);
}

// =============================================================
// Simulated source contract (no delay off-browser)
// =============================================================

#[test]
fn simulated_fetch_succeeds_with_the_seeded_records() {
    let source = SimulatedHistorySource;
    let items = futures::executor::block_on(source.fetch_history()).expect("fetch never fails");
    assert_eq!(items.len(), 3);
    assert_eq!(items[1].text, "городок");
    assert_eq!(items[1].block_reason.as_deref(), Some("Неинтересный"));
}

#[test]
fn simulated_clear_succeeds() {
    let source = SimulatedHistorySource;
    assert_eq!(futures::executor::block_on(source.clear_history()), Ok(()));
}

#[test]
fn handle_wraps_the_simulated_source() {
    let handle = HistorySourceHandle::simulated();
    let items = futures::executor::block_on(handle.0.fetch_history()).expect("fetch never fails");
    assert_eq!(items.len(), 3);
}
