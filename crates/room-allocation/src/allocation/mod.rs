//! Room allocation: normalizes applicant records, then hands out rooms rank by rank.
//!
//! Contention for a room is settled by seniority, then by the priority of the room
//! class the applicant currently holds, then by a shuffle supplied through
//! [`TieBreaker`]. Two applicants naming the same room with the same group tag at the
//! same rank compete as one pair. A winner who leaves a room behind returns it to the
//! pool, and the rank is replayed until no more rooms come back.

mod candidate;
mod contention;
pub mod domain;
pub mod engine;
pub mod import;
pub mod normalizer;
mod parser;
mod pool;
mod result;
pub mod router;
pub mod service;
pub mod tie_break;

#[cfg(test)]
mod tests;

pub use domain::{
    AllocationRequest, AllocationResult, AllocationSummary, Applicant, Assignment, Preference,
    RawApplicant, RoomClass, MAX_PREFERENCES, PAIR_NOTE, SINGLE_NOTE, UNASSIGNED_NOTE,
};
pub use engine::{allocate, allocate_normalized};
pub use import::{
    read_applicants, read_applicants_from_path, read_rooms, read_rooms_from_path, ImportError,
};
pub use normalizer::{clean_room_list, normalize_applicant};
pub use router::{allocation_router, parse_request, InputError};
pub use service::AllocationService;
pub use tie_break::{InputOrder, RandomTieBreaker, TieBreaker};
