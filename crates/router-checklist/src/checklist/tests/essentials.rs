use super::common::*;
use crate::checklist::domain::{ControlKey, TextField};
use crate::checklist::essentials::{apply_essentials, plan_essentials};
use crate::checklist::form::{AssessmentForm, Selections};
use crate::checklist::scoring::evaluate;

#[test]
fn essentials_lift_preset_to_target() {
    let form = preset_form();
    let next = apply_essentials(&form);
    let result = evaluate(&next);

    assert_eq!(next.selections.checked_count(), 16);
    assert_eq!(result.score, 81);
    assert!(result.passed);
    assert_eq!(next.text_fields, form.text_fields);
}

#[test]
fn plan_follows_priority_then_catalog_order() {
    let plan = plan_essentials(&preset_form());

    assert_eq!(
        plan,
        vec![
            ControlKey::PrNoDefaultCreds,
            ControlKey::PrStrongPasswords,
            ControlKey::PrSecureConfig,
            ControlKey::PrAutoUpdates,
            ControlKey::PrMfa,
            ControlKey::PrNetworkIsolation,
            ControlKey::PrNoPortForward,
            ControlKey::DeAlerts,
            ControlKey::DeLogReview,
            ControlKey::PrSsidNoPersonalInfo,
            ControlKey::PrPhysicalSecurity,
            ControlKey::PrPowerProtection,
            ControlKey::DePerformanceMonitoring,
            ControlKey::GvRolesDefined,
            ControlKey::GvVendorUpdates,
            ControlKey::GvDataPolicy,
        ]
    );
}

#[test]
fn already_checked_controls_are_skipped_and_kept() {
    let form = form_with_checked(&[
        ControlKey::PrNoDefaultCreds,
        ControlKey::RcBackupInternet,
        ControlKey::IdCoveragePlan,
    ]);

    let plan = plan_essentials(&form);
    let next = apply_essentials(&form);

    assert!(!plan.contains(&ControlKey::PrNoDefaultCreds));
    assert_eq!(plan.first(), Some(&ControlKey::PrStrongPasswords));
    assert_eq!(plan.len(), 13);
    for key in form.selections.checked_keys() {
        assert!(next.selections.is_checked(key), "{key} was unchecked");
    }
    assert_eq!(evaluate(&next).score, 81);
}

#[test]
fn applying_twice_matches_applying_once() {
    let once = apply_essentials(&preset_form());
    let twice = apply_essentials(&once);

    assert_eq!(once, twice);
    assert!(plan_essentials(&once).is_empty());
}

#[test]
fn form_already_at_target_is_unchanged() {
    let form = fully_checked_form();
    assert_eq!(apply_essentials(&form), form);
}

#[test]
fn unreachable_target_checks_everything_without_error() {
    let form = AssessmentForm::new(blank_fields(), Selections::cleared());
    let next = apply_essentials(&form);
    let result = evaluate(&next);

    assert_eq!(next.selections.checked_count(), all_keys().len());
    assert_eq!(result.score, 40);
    assert!(!result.passed);
    assert_eq!(apply_essentials(&next), next);
}

#[test]
fn target_reached_with_missing_field_still_fails() {
    let form = without_field(preset_form(), TextField::Privacy);
    let next = apply_essentials(&form);
    let result = evaluate(&next);

    assert_eq!(next.selections.checked_count(), 23);
    assert_eq!(result.score, 80);
    assert!(!result.passed);
}

#[test]
fn input_form_is_not_mutated() {
    let form = preset_form();
    let snapshot = form.clone();
    let _ = apply_essentials(&form);
    assert_eq!(form, snapshot);
}
