use super::catalog::ChecklistCatalog;
use super::domain::ControlKey;
use super::form::AssessmentForm;
use super::scoring::{evaluate, TARGET_SCORE};
use tracing::debug;

/// Hand-curated priority list, checked before the rest of the catalog.
///
/// `pr_disableWPS` and `pr_disableUPnP` are bundled into `pr_secureConfig` in the
/// catalog and have no entry of their own; the planner skips them.
pub const ESSENTIAL_KEYS: [&str; 15] = [
    "pr_noDefaultCreds",
    "pr_strongPasswords",
    "pr_secureConfig",
    "pr_autoUpdates",
    "pr_mfa",
    "pr_networkIsolation",
    "pr_noPortForward",
    "de_alerts",
    "de_logReview",
    "pr_disableWPS",
    "pr_disableUPnP",
    "pr_ssidNoPersonalInfo",
    "pr_physicalSecurity",
    "pr_powerProtection",
    "de_performanceMonitoring",
];

/// Essentials first, then every remaining catalog key in declaration order.
pub fn priority_order() -> Vec<ControlKey> {
    let catalog = ChecklistCatalog::standard();
    let mut order: Vec<ControlKey> = Vec::with_capacity(catalog.len());

    for raw in ESSENTIAL_KEYS {
        match raw.parse::<ControlKey>() {
            Ok(key) if !order.contains(&key) => order.push(key),
            Ok(_) => {}
            Err(_) => debug!(key = raw, "essential has no catalog entry, skipping"),
        }
    }

    for item in catalog.items() {
        if !order.contains(&item.key) {
            order.push(item.key);
        }
    }

    order
}

/// Keys that applying the essentials would newly check, in the order they are checked.
pub fn plan_essentials(form: &AssessmentForm) -> Vec<ControlKey> {
    run_plan(form).1
}

/// Greedily checks controls in priority order until the score reaches the target.
///
/// Never unchecks a control and never touches text fields. When the target cannot be
/// reached through controls alone every control ends up checked.
pub fn apply_essentials(form: &AssessmentForm) -> AssessmentForm {
    run_plan(form).0
}

fn run_plan(form: &AssessmentForm) -> (AssessmentForm, Vec<ControlKey>) {
    let mut draft = form.clone();
    let mut added = Vec::new();

    for key in priority_order() {
        if evaluate(&draft).score >= TARGET_SCORE {
            break;
        }
        if !draft.selections.is_checked(key) {
            draft.selections.set(key, true);
            added.push(key);
        }
    }

    let score = evaluate(&draft).score;
    debug!(
        added = added.len(),
        score,
        reached_target = score >= TARGET_SCORE,
        "essentials planned"
    );

    (draft, added)
}
