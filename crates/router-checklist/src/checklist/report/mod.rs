pub mod views;

use super::catalog::ChecklistCatalog;
use super::domain::{Category, ControlItem, Language};
use super::form::{AssessmentForm, Selections};
use super::locale::strings;
use super::scoring::{ScoreResult, TARGET_SCORE};
use views::{
    AssessmentSummary, CatalogView, CategoryGroupView, CategoryProgress, ControlView, FieldView,
    StatusKind, StatusLine,
};

/// Checked/total counts per category, in canonical category order.
pub fn category_progress(form: &AssessmentForm) -> Vec<CategoryProgress> {
    let catalog = ChecklistCatalog::standard();
    Category::ordered()
        .into_iter()
        .filter_map(|category| {
            let items = catalog.items_in(category);
            if items.is_empty() {
                return None;
            }
            let checked = items
                .iter()
                .filter(|item| form.selections.is_checked(item.key))
                .count();
            Some(CategoryProgress {
                category,
                code: category.code(),
                label: category.label(),
                checked,
                total: items.len(),
            })
        })
        .collect()
}

/// The three readiness lines shown beside the score.
pub fn status_lines(language: Language, result: &ScoreResult) -> Vec<StatusLine> {
    let labels = &strings(language).status;

    let missing_inputs = result.missing_required_fields.len();
    let inputs = if missing_inputs == 0 {
        labels.inputs_complete.to_string()
    } else {
        format!("{}: {}", labels.inputs_missing, missing_inputs)
    };

    let missing_controls = result.missing_controls.len();
    let tally = format!("{}/{}", result.checked_controls, result.total_controls);
    let checklist = if missing_controls == 0 {
        format!("{} ({})", labels.checklist_complete, tally)
    } else {
        format!(
            "{}: {} ({})",
            labels.checklist_missing, missing_controls, tally
        )
    };

    let target = format!(
        "{} {} ({}: {})",
        labels.target, TARGET_SCORE, labels.current, result.score
    );

    vec![
        StatusLine {
            kind: StatusKind::Inputs,
            ok: missing_inputs == 0,
            label: inputs,
        },
        StatusLine {
            kind: StatusKind::Checklist,
            ok: missing_controls == 0,
            label: checklist,
        },
        StatusLine {
            kind: StatusKind::Target,
            ok: result.meets_target(),
            label: target,
        },
    ]
}

pub fn control_view(item: &ControlItem, language: Language, checked: bool) -> ControlView {
    ControlView {
        key: item.key,
        category: item.category,
        category_code: item.category.code(),
        category_label: item.category.label(),
        description: item.description_for(language),
        checked,
    }
}

/// Catalog grouped by category with the checked state taken from `selections`.
pub fn catalog_view(language: Language, selections: &Selections) -> CatalogView {
    let catalog = ChecklistCatalog::standard();
    let groups = Category::ordered()
        .into_iter()
        .map(|category| CategoryGroupView {
            category,
            code: category.code(),
            label: category.label(),
            controls: catalog
                .items_in(category)
                .into_iter()
                .map(|item| control_view(item, language, selections.is_checked(item.key)))
                .collect(),
        })
        .filter(|group| !group.controls.is_empty())
        .collect();

    CatalogView {
        language,
        total: catalog.len(),
        groups,
    }
}

pub fn summarize(
    language: Language,
    form: &AssessmentForm,
    result: &ScoreResult,
) -> AssessmentSummary {
    let field_labels = &strings(language).fields;

    AssessmentSummary {
        language,
        score: result.score,
        passed: result.passed,
        required_score: result.required_score,
        control_score: result.control_score,
        checked_controls: result.checked_controls,
        total_controls: result.total_controls,
        missing_required_fields: result
            .missing_required_fields
            .iter()
            .map(|field| FieldView {
                field: *field,
                label: field_labels.get(*field),
            })
            .collect(),
        missing_controls: result
            .missing_controls
            .iter()
            .map(|item| control_view(item, language, false))
            .collect(),
        categories: category_progress(form),
        status: status_lines(language, result),
    }
}
