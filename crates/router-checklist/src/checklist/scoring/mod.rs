//! Maps an assessment form to a 0-100 readiness score and a pass/fail verdict.
//!
//! Required text fields contribute up to [`REQUIRED_WEIGHT`] points and checked
//! controls up to [`CONTROL_WEIGHT`]. Each component is rounded on its own before
//! the two are summed.

mod rules;

use super::catalog::ChecklistCatalog;
use super::domain::{ControlItem, TextField};
use super::form::AssessmentForm;
use serde::Serialize;

pub const REQUIRED_WEIGHT: u32 = 60;
pub const CONTROL_WEIGHT: u32 = 40;
pub const TARGET_SCORE: u8 = 80;
pub const MAX_SCORE: u8 = 100;

/// Derived view of a form; recomputed on every change and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub passed: bool,
    pub required_score: u8,
    pub control_score: u8,
    pub checked_controls: usize,
    pub total_controls: usize,
    pub missing_required_fields: Vec<TextField>,
    pub missing_controls: Vec<&'static ControlItem>,
}

impl ScoreResult {
    pub fn meets_target(&self) -> bool {
        self.score >= TARGET_SCORE
    }
}

pub fn evaluate(form: &AssessmentForm) -> ScoreResult {
    let catalog = ChecklistCatalog::standard();

    let missing_required_fields = rules::missing_required(&form.text_fields);
    let required_total = TextField::required().len();
    let required_done = required_total - missing_required_fields.len();
    let required_score = rules::weighted_share(required_done, required_total, REQUIRED_WEIGHT);

    let missing_controls = rules::missing_controls(&catalog, &form.selections);
    let total_controls = catalog.len();
    let checked_controls = total_controls - missing_controls.len();
    let control_score = rules::weighted_share(checked_controls, total_controls, CONTROL_WEIGHT);

    let score = (required_score + control_score).min(MAX_SCORE);
    let passed = missing_required_fields.is_empty() && score >= TARGET_SCORE;

    ScoreResult {
        score,
        passed,
        required_score,
        control_score,
        checked_controls,
        total_controls,
        missing_required_fields,
        missing_controls,
    }
}
