use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredSnapshot};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;
use woning_ai::config::AppConfig;
use woning_ai::error::AppError;
use woning_ai::telemetry;
use woning_ai::workflows::dashboard::{DashboardService, PlaceholderAnalysisGenerator};

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = ConfiguredSnapshot::from_config(&config.dashboard);
    let snapshot_description = source.describe();
    let service = Arc::new(DashboardService::new(
        Arc::new(source),
        Arc::new(PlaceholderAnalysisGenerator),
        config.scoring.clone(),
    ));

    let app = with_dashboard_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        snapshot = %snapshot_description,
        page_size = config.scoring.page_size,
        "woning dashboard ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
