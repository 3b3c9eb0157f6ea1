use super::super::catalog::ChecklistCatalog;
use super::super::domain::{ControlItem, TextField};
use super::super::form::{Selections, TextFields};

/// `round(done / total * weight)` with halves rounded up, in integer arithmetic.
pub(crate) fn weighted_share(done: usize, total: usize, weight: u32) -> u8 {
    if total == 0 {
        return 0;
    }

    let done = done.min(total) as u64;
    let total = total as u64;
    let numerator = 2 * done * u64::from(weight) + total;
    (numerator / (2 * total)) as u8
}

pub(crate) fn missing_required(text_fields: &TextFields) -> Vec<TextField> {
    TextField::required()
        .into_iter()
        .filter(|field| !text_fields.is_filled(*field))
        .collect()
}

pub(crate) fn missing_controls(
    catalog: &ChecklistCatalog,
    selections: &Selections,
) -> Vec<&'static ControlItem> {
    catalog
        .items()
        .iter()
        .filter(|item| !selections.is_checked(item.key))
        .collect()
}
