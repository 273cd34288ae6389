use std::cmp::Ordering;

use super::domain::{Applicant, PAIR_NOTE, SINGLE_NOTE};
use super::tie_break::TieBreaker;

/// Contender for one room at one rank. Members are indices into the run's applicant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    members: Vec<usize>,
    seniority_score: u64,
    priority_score: u16,
    note: &'static str,
}

impl Candidate {
    pub(crate) fn single(index: usize, applicant: &Applicant) -> Self {
        Self {
            members: vec![index],
            seniority_score: u64::from(applicant.seniority),
            priority_score: u16::from(applicant.current_room_priority),
            note: SINGLE_NOTE,
        }
    }

    pub(crate) fn pair(first: (usize, &Applicant), second: (usize, &Applicant)) -> Self {
        let (first_index, first) = first;
        let (second_index, second) = second;
        Self {
            members: vec![first_index, second_index],
            seniority_score: u64::from(first.seniority) + u64::from(second.seniority),
            priority_score: u16::from(first.current_room_priority)
                + u16::from(second.current_room_priority),
            note: PAIR_NOTE,
        }
    }

    pub(crate) fn members(&self) -> &[usize] {
        &self.members
    }

    pub(crate) fn note(&self) -> &'static str {
        self.note
    }

    pub(crate) fn is_pair(&self) -> bool {
        self.members.len() == 2
    }
}

/// Higher seniority first, then higher current-room priority.
fn by_scores_descending(left: (u64, u16), right: (u64, u16)) -> Ordering {
    right.0.cmp(&left.0).then(right.1.cmp(&left.1))
}

/// Shuffles, then stable-sorts so equal scores keep their shuffled order.
pub(crate) fn rank_candidates<T: TieBreaker>(candidates: &mut [Candidate], tie_breaker: &mut T) {
    tie_breaker.shuffle(candidates);
    candidates.sort_by(|left, right| {
        by_scores_descending(
            (left.seniority_score, left.priority_score),
            (right.seniority_score, right.priority_score),
        )
    });
}

/// Picks the two most eligible members of a tag group, or `None` below two members.
pub(crate) fn select_pair<T: TieBreaker>(
    group: &[usize],
    applicants: &[Applicant],
    tie_breaker: &mut T,
) -> Option<Candidate> {
    if group.len() < 2 {
        return None;
    }

    let mut ordered = group.to_vec();
    tie_breaker.shuffle(&mut ordered);
    ordered.sort_by(|&left, &right| {
        let (left, right) = (&applicants[left], &applicants[right]);
        by_scores_descending(
            (u64::from(left.seniority), u16::from(left.current_room_priority)),
            (u64::from(right.seniority), u16::from(right.current_room_priority)),
        )
    });

    Some(Candidate::pair(
        (ordered[0], &applicants[ordered[0]]),
        (ordered[1], &applicants[ordered[1]]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::tie_break::{InputOrder, RandomTieBreaker};

    fn applicant(name: &str, seniority: u32, priority: u8) -> Applicant {
        Applicant {
            name: name.to_string(),
            seniority,
            current_room_priority: priority,
            current_room: String::new(),
            preferences: Vec::new(),
        }
    }

    #[test]
    fn pair_scores_are_summed() {
        let a = applicant("a", 3, 1);
        let b = applicant("b", 4, 4);
        let pair = Candidate::pair((0, &a), (1, &b));

        assert_eq!(pair.seniority_score, 7);
        assert_eq!(pair.priority_score, 5);
        assert_eq!(pair.note(), PAIR_NOTE);
        assert!(pair.is_pair());
    }

    #[test]
    fn ranking_prefers_seniority_then_priority() {
        let applicants = [
            applicant("low", 1, 4),
            applicant("high", 5, 0),
            applicant("high-priority", 5, 2),
        ];
        let mut candidates: Vec<Candidate> = applicants
            .iter()
            .enumerate()
            .map(|(index, applicant)| Candidate::single(index, applicant))
            .collect();

        rank_candidates(&mut candidates, &mut InputOrder);

        let order: Vec<usize> = candidates.iter().map(|c| c.members()[0]).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn pair_can_outscore_a_senior_single() {
        let applicants = [
            applicant("solo", 6, 0),
            applicant("a", 4, 0),
            applicant("b", 3, 0),
        ];
        let mut candidates = vec![
            Candidate::single(0, &applicants[0]),
            select_pair(&[1, 2], &applicants, &mut InputOrder).expect("pair"),
        ];

        rank_candidates(&mut candidates, &mut InputOrder);

        assert_eq!(candidates[0].members(), &[1, 2]);
    }

    #[test]
    fn lone_tag_member_forms_no_candidate() {
        let applicants = [applicant("a", 9, 4)];
        assert!(select_pair(&[0], &applicants, &mut InputOrder).is_none());
    }

    #[test]
    fn pair_takes_the_two_most_eligible_members() {
        let applicants = [
            applicant("junior", 1, 0),
            applicant("senior", 8, 0),
            applicant("middle", 4, 1),
            applicant("middle-low", 4, 0),
        ];

        for seed in 0..16 {
            let mut breaker = RandomTieBreaker::seeded(seed);
            let pair = select_pair(&[0, 1, 2, 3], &applicants, &mut breaker).expect("pair");
            assert_eq!(pair.members(), &[1, 2]);
        }
    }

    #[test]
    fn exact_ties_are_broken_both_ways_across_seeds() {
        let applicants = [applicant("a", 3, 1), applicant("b", 3, 1)];
        let mut winners = std::collections::HashSet::new();

        for seed in 0..64 {
            let mut candidates = vec![
                Candidate::single(0, &applicants[0]),
                Candidate::single(1, &applicants[1]),
            ];
            rank_candidates(&mut candidates, &mut RandomTieBreaker::seeded(seed));
            winners.insert(candidates[0].members()[0]);
        }

        assert_eq!(winners.len(), 2);
    }
}
