use super::brief::build_brief;
use super::domain::{ControlKey, Language, TextField};
use super::essentials::apply_essentials;
use super::form::AssessmentForm;
use super::report::views::{AssessmentSummary, CategoryProgress, StatusLine};
use super::report::{category_progress, status_lines, summarize};
use super::scoring::{evaluate, ScoreResult};
use tracing::warn;

/// Destination for the generated brief (clipboard, file, terminal).
pub trait BriefSink {
    fn write_brief(&self, brief: &str) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
#[error("brief sink unavailable: {0}")]
pub struct SinkError(pub String);

impl From<std::io::Error> for SinkError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

/// Single owner of the mutable assessment state.
///
/// Every projection is recomputed from the current form; nothing derived is cached.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    form: AssessmentForm,
    language: Language,
}

impl AssessmentSession {
    pub fn new(language: Language) -> Self {
        Self {
            form: AssessmentForm::preset(),
            language,
        }
    }

    pub fn with_form(language: Language, form: AssessmentForm) -> Self {
        Self { form, language }
    }

    pub fn form(&self) -> &AssessmentForm {
        &self.form
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn toggle(&mut self, key: ControlKey, checked: bool) {
        self.form.selections.set(key, checked);
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        self.form.text_fields.set(field, value);
    }

    pub fn apply_essentials(&mut self) {
        self.form = apply_essentials(&self.form);
    }

    pub fn reset(&mut self) {
        self.form = AssessmentForm::preset();
    }

    pub fn switch_language(&mut self) -> Language {
        self.language = self.language.toggle();
        self.language
    }

    pub fn result(&self) -> ScoreResult {
        evaluate(&self.form)
    }

    pub fn brief(&self) -> String {
        build_brief(self.language, &self.form, &self.result())
    }

    pub fn category_progress(&self) -> Vec<CategoryProgress> {
        category_progress(&self.form)
    }

    pub fn status_lines(&self) -> Vec<StatusLine> {
        status_lines(self.language, &self.result())
    }

    pub fn summary(&self) -> AssessmentSummary {
        summarize(self.language, &self.form, &self.result())
    }

    /// Hands the brief to `sink`. Returns whether the copy succeeded; failures are
    /// logged and otherwise ignored.
    pub fn share_brief<S: BriefSink + ?Sized>(&self, sink: &S) -> bool {
        match sink.write_brief(&self.brief()) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "unable to copy brief");
                false
            }
        }
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
