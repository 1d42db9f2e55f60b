use clockabilly::Clockable;
use clockabilly::mock::MockUtcClock;
use cx_api::ConditionStatus;

use super::*;
use crate::conditions::*;

const NOW: i64 = 15;

#[rstest]
fn test_set_condition_new() {
    let clock = MockUtcClock::new(NOW);
    let mut conditions = vec![];
    set_condition(
        &mut conditions,
        remote_synced(ConditionStatus::True, REASON_REMOTE_CREATED, "", Some(1)),
        clock.now(),
    );

    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].type_, REMOTE_SYNCED_CONDITION);
    assert_eq!(conditions[0].last_transition_time, Some(clock.now()));
}

#[rstest]
#[case::same_status(ConditionStatus::True, NOW)]
#[case::flipped_status(ConditionStatus::False, NOW + 10)]
fn test_set_condition_transition_time(#[case] status: ConditionStatus, #[case] expected_ts: i64) {
    let mut clock = MockUtcClock::new(NOW);
    let mut conditions = vec![];
    set_condition(
        &mut conditions,
        remote_synced(ConditionStatus::True, REASON_REMOTE_CREATED, "", Some(1)),
        clock.now(),
    );

    clock.advance(10);
    set_condition(&mut conditions, remote_synced(status, REASON_REMOTE_SYNC_FAILED, "boom", Some(2)), clock.now());

    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].status, status);
    assert_eq!(conditions[0].reason, REASON_REMOTE_SYNC_FAILED);
    assert_eq!(conditions[0].observed_generation, Some(2));
    assert_eq!(conditions[0].last_transition_time.unwrap().timestamp(), expected_ts);
}

#[rstest]
fn test_next_status_keeps_existing_id() {
    let clock = MockUtcClock::new(NOW);
    let current = RemoteStatus { id: Some("abc".into()), ..Default::default() };
    let status = next_status(
        Some(&current),
        None,
        remote_synced(ConditionStatus::False, REASON_EXTRACTION_FAILED, "missing ref", Some(4)),
        Some(4),
        clock.now(),
    );

    assert_eq!(status.id.as_deref(), Some("abc"));
    assert_eq!(status.observed_generation, Some(4));
    assert_eq!(status.condition(REMOTE_SYNCED_CONDITION).unwrap().message, "missing ref");
}
