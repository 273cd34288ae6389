use super::contention::{resolve_pass, RunState};
use super::domain::{AllocationResult, Applicant, RawApplicant, MAX_PREFERENCES};
use super::normalizer::{clean_room_list, normalize_applicant};
use super::pool::RoomPool;
use super::result::build_result;
use super::tie_break::TieBreaker;

/// Allocates `available_rooms` to `applicants` rank by rank.
///
/// Within a rank, passes repeat for as long as winners hand back rooms they previously
/// held, so applicants still waiting at that rank can contest the vacated rooms before
/// anyone moves on to a lower-ranked wish. The tie-breaker only decides between
/// candidates with identical scores.
pub fn allocate<S, T>(
    applicants: &[RawApplicant],
    available_rooms: &[S],
    tie_breaker: &mut T,
) -> AllocationResult
where
    S: AsRef<str>,
    T: TieBreaker,
{
    if applicants.is_empty() {
        return AllocationResult::empty();
    }

    let applicants: Vec<Applicant> = applicants.iter().map(normalize_applicant).collect();
    allocate_normalized(&applicants, available_rooms, tie_breaker)
}

/// Same as [`allocate`] for applicants that are already normalized.
pub fn allocate_normalized<S, T>(
    applicants: &[Applicant],
    available_rooms: &[S],
    tie_breaker: &mut T,
) -> AllocationResult
where
    S: AsRef<str>,
    T: TieBreaker,
{
    let pool = RoomPool::new(clean_room_list(available_rooms));
    let mut state = RunState::new(applicants, pool);

    for rank in 0..MAX_PREFERENCES {
        let mut rooms_added = true;
        while rooms_added {
            if state.unassigned.is_empty() || state.pool.is_empty() {
                return build_result(state);
            }
            rooms_added = resolve_pass(&mut state, rank, tie_breaker);
        }
    }

    build_result(state)
}
