use hirego::assessment::{AssessmentMapper, AssessmentResult, ProfileCatalog};
use hirego::config::CatalogConfig;
use hirego::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Built-in templates plus any configured template file.
pub(crate) fn build_mapper(config: &CatalogConfig) -> Result<AssessmentMapper, AppError> {
    let catalog = ProfileCatalog::with_builtin_profiles();
    if let Some(path) = &config.profile_catalog {
        catalog.load_profiles_from_path(path)?;
    }
    Ok(AssessmentMapper::new(Arc::new(catalog)))
}

/// Read a JSON array of assessment results and reject any that fall outside the score scale.
pub(crate) fn read_assessments(path: &Path) -> Result<Vec<AssessmentResult>, AppError> {
    let raw = fs::read_to_string(path)?;
    let results: Vec<AssessmentResult> = serde_json::from_str(&raw)
        .map_err(|err| AppError::Input(format!("{}: {err}", path.display())))?;

    for result in &results {
        result
            .validate()
            .map_err(|err| AppError::Input(err.to_string()))?;
    }

    Ok(results)
}
