use metrics_exporter_prometheus::PrometheusHandle;
use room_allocation::allocation::AllocationService;
use room_allocation::config::{AllocationConfig, AppConfig};
use room_allocation::error::AppError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service for one-shot CLI runs. An explicit seed wins over `APP_ALLOCATION_SEED`.
pub(crate) fn allocation_service(seed: Option<u64>) -> Result<AllocationService, AppError> {
    let config = match seed {
        Some(seed) => AllocationConfig { seed: Some(seed) },
        None => AppConfig::load()?.allocation,
    };
    Ok(AllocationService::new(config))
}
