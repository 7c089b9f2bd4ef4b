use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryPostRepository};
use crate::routes::with_support_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mindwell::config::AppConfig;
use mindwell::error::AppError;
use mindwell::support::assessment::AssessmentCatalog;
use mindwell::support::community::CommunityService;
use mindwell::telemetry;
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

    let catalog = AssessmentCatalog::standard();
    // Authoring defects in the questionnaire tables abort the boot.
    catalog.validate()?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryPostRepository::default());
    let community = Arc::new(CommunityService::new(repository));

    let app = with_support_routes(Arc::new(catalog), community)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "mindwell support service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
