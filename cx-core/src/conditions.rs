use clockabilly::{
    DateTime,
    Utc,
};
use cx_api::{
    Condition,
    ConditionStatus,
    RemoteStatus,
};

use crate::constants::*;

// Inserts or updates a condition in place; the transition time only moves when the status flips
pub fn set_condition(conditions: &mut Vec<Condition>, mut new: Condition, now: DateTime<Utc>) {
    match conditions.iter_mut().find(|c| c.type_ == new.type_) {
        Some(existing) => {
            if existing.status != new.status || existing.last_transition_time.is_none() {
                existing.last_transition_time = Some(now);
            }
            existing.status = new.status;
            existing.reason = new.reason;
            existing.message = new.message;
            existing.observed_generation = new.observed_generation;
        },
        None => {
            new.last_transition_time = Some(now);
            conditions.push(new);
        },
    }
}

pub fn remote_synced(status: ConditionStatus, reason: &str, message: &str, generation: Option<i64>) -> Condition {
    Condition {
        type_: REMOTE_SYNCED_CONDITION.into(),
        status,
        reason: reason.into(),
        message: message.into(),
        last_transition_time: None,
        observed_generation: generation,
    }
}

// Computes the status to write back after a reconcile attempt, starting from whatever the object
// currently reports
pub fn next_status(
    current: Option<&RemoteStatus>,
    id: Option<String>,
    condition: Condition,
    generation: Option<i64>,
    now: DateTime<Utc>,
) -> RemoteStatus {
    let mut status = current.cloned().unwrap_or_default();
    if id.is_some() {
        status.id = id;
    }
    set_condition(&mut status.conditions, condition, now);
    status.observed_generation = generation;
    status
}
