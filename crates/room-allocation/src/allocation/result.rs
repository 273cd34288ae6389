use super::contention::RunState;
use super::domain::{AllocationResult, Assignment, UNASSIGNED_NOTE};

/// Closes a run: winners keep their award order, everyone left gets an empty assignment
/// in input order.
pub(crate) fn build_result(state: RunState<'_>) -> AllocationResult {
    let unassigned = state
        .unassigned
        .iter()
        .map(|&index| Assignment {
            name: state.applicants[index].name.clone(),
            room: None,
            note: UNASSIGNED_NOTE.to_string(),
        })
        .collect();

    AllocationResult {
        assigned: state.assigned,
        unassigned,
    }
}
