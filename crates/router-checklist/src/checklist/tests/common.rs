use crate::checklist::catalog::control_catalog;
use crate::checklist::domain::{ControlKey, TextField};
use crate::checklist::form::{AssessmentForm, Selections, TextFields};

pub(super) fn preset_form() -> AssessmentForm {
    AssessmentForm::preset()
}

pub(super) fn all_keys() -> Vec<ControlKey> {
    control_catalog().iter().map(|item| item.key).collect()
}

pub(super) fn fully_checked_form() -> AssessmentForm {
    AssessmentForm::new(TextFields::preset(), Selections::from_checked(all_keys()))
}

pub(super) fn blank_fields() -> TextFields {
    TextFields::default()
}

pub(super) fn form_with_checked(keys: &[ControlKey]) -> AssessmentForm {
    AssessmentForm::new(
        TextFields::preset(),
        Selections::from_checked(keys.iter().copied()),
    )
}

pub(super) fn without_field(mut form: AssessmentForm, field: TextField) -> AssessmentForm {
    form.text_fields.set(field, "");
    form
}
