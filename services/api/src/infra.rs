use metrics_exporter_prometheus::PrometheusHandle;
use router_checklist::checklist::{BriefSink, ChecklistError, Language, SinkError};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) default_language: Language,
}

/// Resolves an optional language tag, falling back to `default`.
pub(crate) fn resolve_language(
    raw: Option<&str>,
    default: Language,
) -> Result<Language, ChecklistError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(tag) => tag.parse(),
        None => Ok(default),
    }
}

/// Copy target for the CLI: the brief is written to a file.
pub(crate) struct FileSink {
    pub(crate) path: PathBuf,
}

impl BriefSink for FileSink {
    fn write_brief(&self, brief: &str) -> Result<(), SinkError> {
        fs::write(&self.path, brief)?;
        Ok(())
    }
}
