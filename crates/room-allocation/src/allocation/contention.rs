use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::candidate::{rank_candidates, select_pair, Candidate};
use super::domain::{Applicant, Assignment};
use super::pool::RoomPool;
use super::tie_break::TieBreaker;

/// Mutable state owned by a single allocation run.
#[derive(Debug)]
pub(crate) struct RunState<'a> {
    pub(crate) applicants: &'a [Applicant],
    pub(crate) pool: RoomPool,
    pub(crate) unassigned: BTreeSet<usize>,
    pub(crate) assigned: Vec<Assignment>,
}

impl<'a> RunState<'a> {
    pub(crate) fn new(applicants: &'a [Applicant], pool: RoomPool) -> Self {
        Self {
            applicants,
            pool,
            unassigned: (0..applicants.len()).collect(),
            assigned: Vec::new(),
        }
    }

    fn award(&mut self, room: &str, winner: &Candidate) -> bool {
        let mut released = false;

        for &index in winner.members() {
            let applicant = &self.applicants[index];
            self.assigned.push(Assignment {
                name: applicant.name.clone(),
                room: Some(room.to_string()),
                note: winner.note().to_string(),
            });
            self.unassigned.remove(&index);
        }
        self.pool.take(room);
        debug!(room, pair = winner.is_pair(), "room awarded");

        for &index in winner.members() {
            if let Some(vacated) = self.applicants[index].vacated_room(room) {
                if self.pool.release(vacated) {
                    debug!(room = vacated, "vacated room re-offered");
                    released = true;
                }
            }
        }

        released
    }
}

#[derive(Debug, Default)]
struct RoomContenders {
    singles: Vec<usize>,
    groups: BTreeMap<String, Vec<usize>>,
}

fn collect_contenders(state: &RunState<'_>, rank: usize) -> BTreeMap<String, RoomContenders> {
    let mut by_room: BTreeMap<String, RoomContenders> = BTreeMap::new();

    for &index in &state.unassigned {
        let Some(preference) = state.applicants[index].preference_at(rank) else {
            continue;
        };
        if !state.pool.contains(&preference.room_id) {
            continue;
        }

        let contenders = by_room.entry(preference.room_id.clone()).or_default();
        if preference.is_joint() {
            contenders
                .groups
                .entry(preference.group_tag.clone())
                .or_default()
                .push(index);
        } else {
            contenders.singles.push(index);
        }
    }

    by_room
}

/// Runs one contention pass at `rank`. Returns `true` when a winner vacated a room
/// that was not already on offer.
pub(crate) fn resolve_pass<T: TieBreaker>(
    state: &mut RunState<'_>,
    rank: usize,
    tie_breaker: &mut T,
) -> bool {
    let mut rooms_added = false;

    for (room, contenders) in collect_contenders(state, rank) {
        if !state.pool.contains(&room) {
            continue;
        }

        let mut candidates: Vec<Candidate> = contenders
            .singles
            .iter()
            .map(|&index| Candidate::single(index, &state.applicants[index]))
            .collect();
        for group in contenders.groups.values() {
            if let Some(pair) = select_pair(group, state.applicants, tie_breaker) {
                candidates.push(pair);
            }
        }

        if candidates.is_empty() {
            continue;
        }

        rank_candidates(&mut candidates, tie_breaker);
        if state.award(&room, &candidates[0]) {
            rooms_added = true;
        }
    }

    rooms_added
}
