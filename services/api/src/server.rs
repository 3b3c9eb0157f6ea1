use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::checklist_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use router_checklist::config::AppConfig;
use router_checklist::error::AppError;
use router_checklist::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        default_language: config.checklist.default_language,
    };

    let app = checklist_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        language = %config.checklist.default_language,
        "router checklist service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
