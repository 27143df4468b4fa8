use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryShiftRepository};
use crate::routes::with_shift_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use border_checkpoint::config::AppConfig;
use border_checkpoint::error::AppError;
use border_checkpoint::telemetry;
use border_checkpoint::workflows::checkpoint::shifts::ShiftService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let repository = Arc::new(InMemoryShiftRepository::default());
    let shift_service = Arc::new(ShiftService::new(repository, config.inspection.clone()));

    let app = with_shift_routes(shift_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        expiry_cutoff = %config.inspection.expiry_cutoff,
        "border checkpoint ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
