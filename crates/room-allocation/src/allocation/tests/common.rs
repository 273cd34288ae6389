use std::collections::HashMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::allocation::domain::{AllocationResult, RawApplicant, PAIR_NOTE};
use crate::allocation::{allocation_router, AllocationService};
use crate::config::AllocationConfig;

pub(super) fn applicant(name: &str, seniority: i64, preferences: &[&str]) -> RawApplicant {
    RawApplicant {
        name: Some(name.to_string()),
        current_room: None,
        current_room_type: None,
        seniority: Some(seniority),
        preferences: Some(
            preferences
                .iter()
                .map(|entry| Some(entry.to_string()))
                .collect(),
        ),
    }
}

pub(super) fn resident(
    name: &str,
    seniority: i64,
    current_room: &str,
    room_type: &str,
    preferences: &[&str],
) -> RawApplicant {
    let mut raw = applicant(name, seniority, preferences);
    raw.current_room = Some(current_room.to_string());
    raw.current_room_type = Some(room_type.to_string());
    raw
}

pub(super) fn rooms(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Every applicant is reported exactly once and no room is handed out twice.
pub(super) fn assert_consistent(result: &AllocationResult, applicants: &[RawApplicant]) {
    assert_eq!(
        result.assigned.len() + result.unassigned.len(),
        applicants.len()
    );

    let mut names: Vec<&str> = result
        .assigned
        .iter()
        .chain(result.unassigned.iter())
        .map(|assignment| assignment.name.as_str())
        .collect();
    names.sort_unstable();
    let mut expected: Vec<&str> = applicants
        .iter()
        .map(|raw| raw.name.as_deref().unwrap_or_default().trim())
        .collect();
    expected.sort_unstable();
    assert_eq!(names, expected);

    let mut holders: HashMap<&str, Vec<&str>> = HashMap::new();
    for assignment in &result.assigned {
        let room = assignment
            .room
            .as_deref()
            .expect("assigned entries carry a room");
        holders.entry(room).or_default().push(assignment.note.as_str());
    }
    for (room, notes) in holders {
        match notes.as_slice() {
            [_] => {}
            [first, second] => {
                assert_eq!(*first, PAIR_NOTE, "room {room} shared outside a pair");
                assert_eq!(*second, PAIR_NOTE, "room {room} shared outside a pair");
            }
            _ => panic!("room {room} handed out {} times", notes.len()),
        }
    }
    assert!(result.unassigned.iter().all(|entry| entry.room.is_none()));
}

pub(super) fn seeded_service(seed: u64) -> AllocationService {
    AllocationService::new(AllocationConfig { seed: Some(seed) })
}

pub(super) fn router_with_seed(seed: u64) -> axum::Router {
    allocation_router(Arc::new(seeded_service(seed)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
