use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryEngagementRepository, InMemoryLeadRepository, InMemorySettingsRepository,
};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lead_intake::config::AppConfig;
use lead_intake::error::AppError;
use lead_intake::intake::LeadIntakeService;
use lead_intake::metrics::MetricsState;
use lead_intake::telemetry;
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

    let leads = Arc::new(LeadIntakeService::new(Arc::new(
        InMemoryLeadRepository::default(),
    )));
    let settings = Arc::new(InMemorySettingsRepository::default());
    let engagement = MetricsState {
        repository: Arc::new(InMemoryEngagementRepository::default()),
        heatmap_limit: config.engagement.heatmap_limit,
    };

    let app = with_service_routes(leads, settings, engagement)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lead intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
