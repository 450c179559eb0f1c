use metrics_exporter_prometheus::PrometheusHandle;
use persona_quiz::config::AppConfig;
use persona_quiz::error::AppError;
use persona_quiz::quiz::QuizService;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the quiz service from configuration; catalog problems are fatal.
pub(crate) fn quiz_service(config: &AppConfig) -> Result<QuizService, AppError> {
    let service = QuizService::from_config(&config.quiz)?;
    info!(
        questions = service.engine().questions().len(),
        types = service.engine().types().len(),
        "quiz catalogs ready"
    );
    Ok(service)
}
