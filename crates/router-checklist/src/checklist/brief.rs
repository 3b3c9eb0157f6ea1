use super::catalog::ChecklistCatalog;
use super::domain::{ControlItem, Language, TextField};
use super::form::AssessmentForm;
use super::locale::{strings, Strings, ARCHITECTURE};
use super::scoring::{ScoreResult, MAX_SCORE};

const SUMMARY_HEADING: &str = "## Detailed summary";
const INPUTS_HEADING: &str = "## Inputs (auto-filled)";
const CHECKED_HEADING: &str = "## Checklist (checked)";
const MISSING_HEADING: &str = "## Checklist (missing)";
const MISSING_INPUTS_HEADING: &str = "## Missing required inputs";

const CHECKED_MARKER: &str = "[x]";
const UNCHECKED_MARKER: &str = "[ ]";

/// Renders the shareable plain-text brief.
///
/// Section order and structure are fixed; `language` only selects which labels are
/// interpolated. Lists follow catalog order, and the output carries no timestamps, so
/// identical inputs always produce identical text.
pub fn build_brief(language: Language, form: &AssessmentForm, result: &ScoreResult) -> String {
    let text = strings(language);
    let labels = &text.brief;
    let fields = &form.text_fields;

    let mut lines = vec![
        format!(
            "{}{} ({})",
            labels.project_prefix, labels.project_name, text.router
        ),
        status_line(text, result),
        SUMMARY_HEADING.to_string(),
        format!("- {}: {}", labels.hardware, text.router),
        format!("- {}: {}", labels.architecture, ARCHITECTURE),
        format!("- {}: {}", labels.data_handling, fields.data),
        format!("- {}: {}", labels.security_controls, fields.privacy),
        format!("- {}: {}", labels.kpis, fields.metric),
        INPUTS_HEADING.to_string(),
    ];

    lines.extend(TextField::ordered().into_iter().map(|field| {
        format!("- {}: {}", text.fields.get(field), fields.get(field))
    }));

    let checked: Vec<&ControlItem> = ChecklistCatalog::standard()
        .items()
        .iter()
        .filter(|item| form.selections.is_checked(item.key))
        .collect();

    lines.push(CHECKED_HEADING.to_string());
    push_control_lines(&mut lines, text, language, CHECKED_MARKER, &checked);

    lines.push(MISSING_HEADING.to_string());
    push_control_lines(
        &mut lines,
        text,
        language,
        UNCHECKED_MARKER,
        &result.missing_controls,
    );

    if !result.missing_required_fields.is_empty() {
        lines.push(MISSING_INPUTS_HEADING.to_string());
        lines.extend(
            result
                .missing_required_fields
                .iter()
                .map(|field| format!("- {}", text.fields.get(*field))),
        );
    }

    lines.join("\n")
}

fn status_line(text: &Strings, result: &ScoreResult) -> String {
    let labels = &text.brief;
    let verdict = if result.passed {
        labels.passed
    } else {
        labels.not_passed
    };

    format!(
        "{}{} · {}{}/{}",
        labels.status_prefix, verdict, labels.score_prefix, result.score, MAX_SCORE
    )
}

fn push_control_lines(
    lines: &mut Vec<String>,
    text: &Strings,
    language: Language,
    marker: &str,
    items: &[&ControlItem],
) {
    if items.is_empty() {
        lines.push(format!("- {}", text.brief.none));
        return;
    }

    lines.extend(items.iter().map(|item| {
        format!(
            "- {} {}: {}",
            marker,
            item.category.label(),
            item.description_for(language)
        )
    }));
}
