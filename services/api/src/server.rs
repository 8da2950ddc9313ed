use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryAssessmentRepository, InMemoryEntityRepository, InMemoryEventPublisher,
};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nova_advisory::config::AppConfig;
use nova_advisory::error::AppError;
use nova_advisory::telemetry;
use nova_advisory::workflows::eligibility::EligibilityService;
use nova_advisory::workflows::lifecycle::LifecycleService;
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

    let eligibility = Arc::new(EligibilityService::new(Arc::new(
        InMemoryAssessmentRepository::default(),
    )));
    let lifecycle = Arc::new(LifecycleService::new(
        Arc::new(InMemoryEntityRepository::default()),
        Arc::new(InMemoryEventPublisher::default()),
    ));

    let app = with_workflow_routes(eligibility, lifecycle)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "advisory platform ready");

    axum::serve(listener, app).await?;
    Ok(())
}
