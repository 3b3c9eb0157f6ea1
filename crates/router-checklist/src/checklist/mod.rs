//! Home Wi-Fi router hardening checklist: catalog, scoring, essentials planning,
//! and brief generation.

mod brief;
mod catalog;
pub mod domain;
mod essentials;
pub mod export;
pub mod form;
pub mod locale;
pub mod report;
pub mod scoring;
mod session;

#[cfg(test)]
mod tests;

pub use brief::build_brief;
pub use catalog::{control_catalog, ChecklistCatalog};
pub use domain::{Category, ChecklistError, ControlItem, ControlKey, Language, TextField};
pub use essentials::{apply_essentials, plan_essentials, priority_order, ESSENTIAL_KEYS};
pub use form::{AssessmentForm, Selections, TextFields};
pub use report::{catalog_view, category_progress, status_lines, summarize};
pub use scoring::{evaluate, ScoreResult, TARGET_SCORE};
pub use session::{AssessmentSession, BriefSink, SinkError};
