use router_checklist::checklist::{
    apply_essentials, build_brief, catalog_view, control_catalog, evaluate, plan_essentials,
    AssessmentForm, AssessmentSession, Category, ChecklistCatalog, ChecklistError, ControlKey,
    Language, Selections, TextField, TextFields, ESSENTIAL_KEYS, TARGET_SCORE,
};

#[test]
fn catalog_is_grouped_and_addressable_by_wire_key() {
    let catalog = ChecklistCatalog::standard();
    assert_eq!(catalog.len(), control_catalog().len());

    let secure_config: ControlKey = "pr_secureConfig".parse().expect("known key");
    let item = catalog.get(secure_config).expect("item present");
    assert_eq!(item.category, Category::Protect);
    assert!(item.description.contains("WPA2/WPA3"));

    let baseline = catalog
        .get(ControlKey::GvDataPolicy)
        .expect("baseline item present");
    assert_eq!(baseline.category, Category::Govern);

    assert_eq!(
        "pr_disableWPS".parse::<ControlKey>(),
        Err(ChecklistError::UnknownControl("pr_disableWPS".to_string()))
    );
    assert!(ESSENTIAL_KEYS.contains(&"pr_disableWPS"));
}

#[test]
fn user_walkthrough_from_preset_to_passing_brief() {
    let mut session = AssessmentSession::new(Language::En);
    assert_eq!(session.result().score, 60);

    session.toggle(ControlKey::RsTakeoverPlan, true);
    assert_eq!(session.result().score, 61);

    let planned = plan_essentials(session.form());
    session.apply_essentials();
    let result = session.result();

    assert!(result.score >= TARGET_SCORE);
    assert!(result.passed);
    assert_eq!(result.checked_controls, 1 + planned.len());
    assert!(session.form().selections.is_checked(ControlKey::RsTakeoverPlan));

    let brief = session.brief();
    assert!(brief.starts_with("Project: SDG 9 Security System (Wi-Fi Router)\nStatus: PASSED"));
    assert!(brief.contains("- [x] Respond: Incident response actions"));
    assert!(!brief.contains("## Missing required inputs"));
}

#[test]
fn pass_gate_is_independent_from_numeric_score() {
    let everything = Selections::from_checked(control_catalog().iter().map(|item| item.key));
    let mut form = AssessmentForm::new(TextFields::preset(), everything);
    assert!(evaluate(&form).passed);

    form.text_fields.set(TextField::Hardware, "   ");
    let result = evaluate(&form);
    assert_eq!(result.score, 90);
    assert!(!result.passed);

    let brief = build_brief(Language::En, &form, &result);
    assert!(brief.ends_with("## Missing required inputs\n- Hardware"));
}

#[test]
fn essentials_never_reduce_selections() {
    let seeded = Selections::from_checked([
        ControlKey::IdNetworkMap,
        ControlKey::RcRebuildSteps,
        ControlKey::PrChannelPlan,
    ]);
    let form = AssessmentForm::new(TextFields::preset(), seeded);
    let next = apply_essentials(&form);

    for key in form.selections.checked_keys() {
        assert!(next.selections.is_checked(key));
    }
    assert!(next.selections.checked_count() >= form.selections.checked_count());
    assert_eq!(apply_essentials(&next), next);
}

#[test]
fn catalog_view_reflects_language_and_selection() {
    let selections = Selections::from_checked([ControlKey::DeAlerts]);
    let view = catalog_view(Language::Km, &selections);

    assert_eq!(view.total, 31);
    assert_eq!(view.groups.len(), 6);
    let detect = view
        .groups
        .iter()
        .find(|group| group.code == "DE")
        .expect("detect group present");
    assert_eq!(detect.label, "Detect");
    assert!(detect.controls[0].checked);
    assert!(detect.controls[0].description.starts_with("បើក alerts/logs"));
    assert!(detect.controls[1..].iter().all(|control| !control.checked));
}
