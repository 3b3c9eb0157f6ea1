use super::domain::{Language, TextField};
use serde::Serialize;

/// Architecture line echoed in every brief, regardless of form content.
pub const ARCHITECTURE: &str = "Device → Network/Gateway → Dashboard (app/server)";

/// Immutable label table for one language.
#[derive(Debug, Serialize)]
pub struct Strings {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub language: &'static str,
    pub pass_rule: &'static str,
    pub router: &'static str,
    pub copied: &'static str,
    pub fields: FieldLabels,
    pub buttons: ButtonLabels,
    pub brief: BriefLabels,
    pub status: StatusLabels,
}

#[derive(Debug, Serialize)]
pub struct FieldLabels {
    pub system_type: &'static str,
    pub hardware: &'static str,
    pub software: &'static str,
    pub data: &'static str,
    pub privacy: &'static str,
    pub metric: &'static str,
    pub alignment: &'static str,
}

impl FieldLabels {
    pub const fn get(&self, field: TextField) -> &'static str {
        match field {
            TextField::SystemType => self.system_type,
            TextField::Hardware => self.hardware,
            TextField::Software => self.software,
            TextField::Data => self.data,
            TextField::Privacy => self.privacy,
            TextField::Metric => self.metric,
            TextField::Alignment => self.alignment,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ButtonLabels {
    pub reset: &'static str,
    pub copy: &'static str,
    pub essentials: &'static str,
}

/// Phrases interpolated into the brief. Section headings are shared across languages.
#[derive(Debug, Serialize)]
pub struct BriefLabels {
    pub project_prefix: &'static str,
    pub project_name: &'static str,
    pub status_prefix: &'static str,
    pub passed: &'static str,
    pub not_passed: &'static str,
    pub score_prefix: &'static str,
    pub hardware: &'static str,
    pub architecture: &'static str,
    pub data_handling: &'static str,
    pub security_controls: &'static str,
    pub kpis: &'static str,
    pub none: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StatusLabels {
    pub inputs_complete: &'static str,
    pub inputs_missing: &'static str,
    pub checklist_complete: &'static str,
    pub checklist_missing: &'static str,
    pub target: &'static str,
    pub current: &'static str,
}

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Km => &KM,
    }
}

static EN: Strings = Strings {
    app_title: "Home Router Security Checklist",
    app_subtitle: "",
    language: "Language",
    pass_rule: "Pass = required inputs (auto-filled) + score ≥ 80.",
    router: "Wi-Fi Router",
    copied: "Copied!",
    fields: FieldLabels {
        system_type: "System type",
        hardware: "Hardware",
        software: "Software",
        data: "Data collected",
        privacy: "Security/privacy controls",
        metric: "KPIs (metrics)",
        alignment: "SDG alignment",
    },
    buttons: ButtonLabels {
        reset: "Reset",
        copy: "Copy Brief",
        essentials: "Auto-check essentials",
    },
    brief: BriefLabels {
        project_prefix: "Project: ",
        project_name: "SDG 9 Security System",
        status_prefix: "Status: ",
        passed: "PASSED",
        not_passed: "NOT PASSED",
        score_prefix: "Score: ",
        hardware: "Hardware",
        architecture: "Architecture",
        data_handling: "Data handling",
        security_controls: "Security controls",
        kpis: "KPIs",
        none: "(none)",
    },
    status: StatusLabels {
        inputs_complete: "Inputs complete (auto-filled)",
        inputs_missing: "Missing inputs",
        checklist_complete: "Checklist complete",
        checklist_missing: "Unchecked controls",
        target: "Target score ≥",
        current: "current",
    },
};

static KM: Strings = Strings {
    app_title: "Home Router Security Checklist",
    app_subtitle: "Wi-Fi Router Checklist & Scoring",
    language: "ភាសា",
    pass_rule: "ជាប់ = inputs (auto) + ពិន្ទុ ≥ 80។",
    router: "Wi-Fi Router",
    copied: "បានចម្លង!",
    fields: FieldLabels {
        system_type: "ប្រភេទប្រព័ន្ធ",
        hardware: "ហារដវែរ",
        software: "សូហ្វវែរ",
        data: "ទិន្នន័យប្រមូល",
        privacy: "ការការពារ/ឯកជនភាព",
        metric: "KPIs (សូចនាករ)",
        alignment: "ការភ្ជាប់ទៅ SDG",
    },
    buttons: ButtonLabels {
        reset: "កំណត់ឡើងវិញ",
        copy: "ចម្លងពត៌មានសង្ខេប",
        essentials: "ចុច Essentials ស្វ័យប្រវត្តិ",
    },
    brief: BriefLabels {
        project_prefix: "គម្រោង៖ ",
        project_name: "ប្រព័ន្ធសុវត្ថិភាព SDG 9",
        status_prefix: "ស្ថានភាព៖ ",
        passed: "ជាប់",
        not_passed: "មិនជាប់",
        score_prefix: "ពិន្ទុ៖ ",
        hardware: "Hardware",
        architecture: "ស្ថាបត្យកម្ម",
        data_handling: "ទិន្នន័យ",
        security_controls: "ការការពារ",
        kpis: "KPIs",
        none: "(មិនមាន)",
    },
    status: StatusLabels {
        inputs_complete: "Inputs ពេញលេញ (auto)",
        inputs_missing: "Inputs ខ្វះ",
        checklist_complete: "Checklist ពេញលេញ",
        checklist_missing: "Controls ខ្វះ",
        target: "គោលដៅ ≥",
        current: "បច្ចុប្បន្ន",
    },
};
