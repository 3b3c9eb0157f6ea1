use super::super::domain::{Category, ControlKey, Language, TextField};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub category: Category,
    pub code: &'static str,
    pub label: &'static str,
    pub checked: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Inputs,
    Checklist,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub ok: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub key: ControlKey,
    pub category: Category,
    pub category_code: &'static str,
    pub category_label: &'static str,
    pub description: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: TextField,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroupView {
    pub category: Category,
    pub code: &'static str,
    pub label: &'static str,
    pub controls: Vec<ControlView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub language: Language,
    pub total: usize,
    pub groups: Vec<CategoryGroupView>,
}

/// Everything the shell renders next to the form, localized for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub language: Language,
    pub score: u8,
    pub passed: bool,
    pub required_score: u8,
    pub control_score: u8,
    pub checked_controls: usize,
    pub total_controls: usize,
    pub missing_required_fields: Vec<FieldView>,
    pub missing_controls: Vec<ControlView>,
    pub categories: Vec<CategoryProgress>,
    pub status: Vec<StatusLine>,
}
