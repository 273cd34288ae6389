use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_allocation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use room_allocation::allocation::AllocationService;
use room_allocation::config::AppConfig;
use room_allocation::error::AppError;
use room_allocation::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

fn build_app(service: Arc<AllocationService>, state: AppState) -> axum::Router {
    with_allocation_routes(service).layer(Extension(state))
}

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let allocation_service = Arc::new(AllocationService::new(config.allocation));
    let seeded = allocation_service.config().seed.is_some();

    let app = build_app(allocation_service, app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded,
        "room allocation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use room_allocation::config::AllocationConfig;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    #[tokio::test]
    async fn built_app_serves_assign_and_readiness_routes() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let service = Arc::new(AllocationService::new(AllocationConfig { seed: Some(9) }));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(recorder.handle()),
        };
        let app = build_app(service, state);

        let ready = app
            .clone()
            .oneshot(
                axum::http::Request::get("/ready")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(ready.status(), StatusCode::OK);

        let assign = app
            .oneshot(
                axum::http::Request::post("/api/assign")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(assign.status(), StatusCode::OK);
    }
}
