use tracing::info;

use super::domain::{AllocationRequest, AllocationResult, RawApplicant};
use super::engine::allocate;
use super::tie_break::RandomTieBreaker;
use crate::config::AllocationConfig;

/// Facade used by the router and CLI. Every call builds fresh run state and a fresh RNG,
/// so one service can be shared across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct AllocationService {
    config: AllocationConfig,
}

impl AllocationService {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    pub fn allocate<S: AsRef<str>>(
        &self,
        applicants: &[RawApplicant],
        available_rooms: &[S],
    ) -> AllocationResult {
        let result = match self.config.seed {
            Some(seed) => allocate(
                applicants,
                available_rooms,
                &mut RandomTieBreaker::seeded(seed),
            ),
            None => allocate(
                applicants,
                available_rooms,
                &mut RandomTieBreaker::from_entropy(),
            ),
        };

        let summary = result.summary();
        info!(
            applicants = summary.applicants,
            rooms = available_rooms.len(),
            assigned = summary.assigned,
            unassigned = summary.unassigned,
            paired = summary.paired_applicants,
            seeded = self.config.seed.is_some(),
            "allocation completed"
        );

        result
    }

    /// Missing `applicants` or `availableRooms` are treated as empty lists, `null` room
    /// entries are dropped.
    pub fn allocate_request(&self, request: AllocationRequest) -> AllocationResult {
        let applicants = request.applicants.unwrap_or_default();
        let rooms: Vec<String> = request
            .available_rooms
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();
        self.allocate(&applicants, &rooms)
    }
}
