use super::common::*;
use crate::checklist::brief::build_brief;
use crate::checklist::domain::{ControlKey, Language, TextField};
use crate::checklist::essentials::apply_essentials;
use crate::checklist::form::AssessmentForm;
use crate::checklist::scoring::evaluate;

fn brief_for(language: Language, form: &AssessmentForm) -> String {
    build_brief(language, form, &evaluate(form))
}

fn section<'a>(brief: &'a str, heading: &str) -> Vec<&'a str> {
    brief
        .lines()
        .skip_while(|line| *line != heading)
        .skip(1)
        .take_while(|line| !line.starts_with("## "))
        .collect()
}

#[test]
fn preset_brief_has_expected_header_and_summary() {
    let brief = brief_for(Language::En, &preset_form());
    let lines: Vec<&str> = brief.lines().collect();

    assert_eq!(lines[0], "Project: SDG 9 Security System (Wi-Fi Router)");
    assert_eq!(lines[1], "Status: NOT PASSED · Score: 60/100");
    assert_eq!(lines[2], "## Detailed summary");
    assert_eq!(lines[3], "- Hardware: Wi-Fi Router");
    assert_eq!(
        lines[4],
        "- Architecture: Device → Network/Gateway → Dashboard (app/server)"
    );
    assert_eq!(
        lines[5],
        "- Data handling: Login/audit logs, Alerts history, Device health (offline)"
    );
    assert_eq!(lines[8], "## Inputs (auto-filled)");
    assert_eq!(lines[9], "- System type: Home IoT security system + dashboard");
    assert_eq!(lines[15], "- SDG alignment: Resilient infrastructure (SDG 9)");
    assert!(!brief.ends_with('\n'));
    assert!(brief.lines().all(|line| !line.is_empty()));
}

#[test]
fn sections_appear_in_fixed_order() {
    let form = without_field(preset_form(), TextField::Data);
    let brief = brief_for(Language::En, &form);
    let headings: Vec<&str> = brief
        .lines()
        .filter(|line| line.starts_with("## "))
        .collect();

    assert_eq!(
        headings,
        vec![
            "## Detailed summary",
            "## Inputs (auto-filled)",
            "## Checklist (checked)",
            "## Checklist (missing)",
            "## Missing required inputs",
        ]
    );
    assert_eq!(section(&brief, "## Missing required inputs"), vec!["- Data collected"]);
    assert!(brief.lines().any(|line| line == "- Data handling: "));
}

#[test]
fn empty_lists_render_placeholder_and_missing_inputs_is_omitted() {
    let preset = brief_for(Language::En, &preset_form());
    assert_eq!(section(&preset, "## Checklist (checked)"), vec!["- (none)"]);
    assert_eq!(section(&preset, "## Checklist (missing)").len(), 31);
    assert!(!preset.contains("## Missing required inputs"));

    let complete = brief_for(Language::En, &fully_checked_form());
    assert_eq!(section(&complete, "## Checklist (missing)"), vec!["- (none)"]);
    assert_eq!(
        complete.lines().nth(1),
        Some("Status: PASSED · Score: 100/100")
    );
}

#[test]
fn checklist_lines_follow_catalog_order_with_markers() {
    let form = form_with_checked(&[ControlKey::RcBackupInternet, ControlKey::GvRolesDefined]);
    let brief = brief_for(Language::En, &form);
    let checked = section(&brief, "## Checklist (checked)");

    assert_eq!(
        checked,
        vec![
            "- [x] Govern: Authorized admin owner + no shared admin (only trusted users can change router settings)",
            "- [x] Recover: Backup connectivity plan (4G/5G hotspot/failover ready; steps documented for downtime)",
        ]
    );

    let missing = section(&brief, "## Checklist (missing)");
    assert_eq!(missing.len(), 29);
    assert!(missing.iter().all(|line| line.starts_with("- [ ] ")));
    assert_eq!(
        missing[0],
        "- [ ] Govern: Vendor/ISP lifecycle + update policy (support window, update method, who is responsible for patching)"
    );
}

#[test]
fn khmer_brief_keeps_structure_and_swaps_labels() {
    let form = without_field(preset_form(), TextField::Metric);
    let en = brief_for(Language::En, &form);
    let km = brief_for(Language::Km, &form);

    assert_eq!(en.lines().count(), km.lines().count());
    assert_eq!(
        km.lines().next(),
        Some("គម្រោង៖ ប្រព័ន្ធសុវត្ថិភាព SDG 9 (Wi-Fi Router)")
    );
    assert_eq!(km.lines().nth(1), Some("ស្ថានភាព៖ មិនជាប់ · ពិន្ទុ៖ 50/100"));
    assert_eq!(section(&km, "## Checklist (checked)"), vec!["- (មិនមាន)"]);
    assert_eq!(
        section(&km, "## Missing required inputs"),
        vec!["- KPIs (សូចនាករ)"]
    );
    assert!(km.contains("- [ ] Govern: កំណត់ម្ចាស់ admin"));
}

#[test]
fn brief_is_stable_for_identical_inputs() {
    let form = apply_essentials(&preset_form());
    let result = evaluate(&form);

    let first = build_brief(Language::En, &form, &result);
    let second = build_brief(Language::En, &form, &result);
    assert_eq!(first, second);

    let first_km = build_brief(Language::Km, &form, &result);
    assert_eq!(first_km, build_brief(Language::Km, &form, &result));
}
