use super::catalog::control_catalog;
use super::domain::{ControlKey, TextField};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Free-text answers, keyed by the `TextField` wire names.
///
/// Deserialization merges over the preset: a key that is absent keeps its preset answer,
/// so a field is only cleared by sending it as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "TextFields::preset", rename_all = "camelCase")]
pub struct TextFields {
    pub system_type: String,
    pub hardware: String,
    pub software: String,
    pub data: String,
    pub privacy: String,
    pub metric: String,
    pub alignment: String,
}

impl TextFields {
    /// Sample answers the form starts from.
    pub fn preset() -> Self {
        Self {
            system_type: "Home IoT security system + dashboard".to_string(),
            hardware: "Wi-Fi router".to_string(),
            software: "Web dashboard UI, Backend API, Authentication (login), Alerts (push/SMS/email), Audit logs, Device management".to_string(),
            data: "Login/audit logs, Alerts history, Device health (offline)".to_string(),
            privacy: "TLS/HTTPS, Strong password policy, No default credentials, Auto updates/patching, No port forwarding".to_string(),
            metric: "Uptime %, Patch compliance %, Alert latency, MTTR".to_string(),
            alignment: "Resilient infrastructure (SDG 9)".to_string(),
        }
    }

    pub fn get(&self, field: TextField) -> &str {
        match field {
            TextField::SystemType => &self.system_type,
            TextField::Hardware => &self.hardware,
            TextField::Software => &self.software,
            TextField::Data => &self.data,
            TextField::Privacy => &self.privacy,
            TextField::Metric => &self.metric,
            TextField::Alignment => &self.alignment,
        }
    }

    pub fn set(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::SystemType => &mut self.system_type,
            TextField::Hardware => &mut self.hardware,
            TextField::Software => &mut self.software,
            TextField::Data => &mut self.data,
            TextField::Privacy => &mut self.privacy,
            TextField::Metric => &mut self.metric,
            TextField::Alignment => &mut self.alignment,
        };
        *slot = value.into();
    }

    pub fn is_filled(&self, field: TextField) -> bool {
        !self.get(field).trim().is_empty()
    }
}

/// Checked state for every catalog control.
///
/// Always holds an entry per catalog key: construction starts from [`Selections::cleared`]
/// and deserialization overlays the provided entries onto that full map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selections(BTreeMap<ControlKey, bool>);

impl Selections {
    pub fn cleared() -> Self {
        Self(
            control_catalog()
                .iter()
                .map(|item| (item.key, false))
                .collect(),
        )
    }

    pub fn from_checked<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = ControlKey>,
    {
        let mut selections = Self::cleared();
        for key in keys {
            selections.set(key, true);
        }
        selections
    }

    pub fn is_checked(&self, key: ControlKey) -> bool {
        self.0.get(&key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: ControlKey, checked: bool) {
        self.0.insert(key, checked);
    }

    pub fn checked_count(&self) -> usize {
        self.0.values().filter(|checked| **checked).count()
    }

    pub fn checked_keys(&self) -> impl Iterator<Item = ControlKey> + '_ {
        self.0
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Selections {
    fn default() -> Self {
        Self::cleared()
    }
}

impl<'de> Deserialize<'de> for Selections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let provided = BTreeMap::<ControlKey, bool>::deserialize(deserializer)?;
        let mut selections = Self::cleared();
        for (key, checked) in provided {
            selections.set(key, checked);
        }
        Ok(selections)
    }
}

/// Snapshot handed to the scoring, planning, and brief functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentForm {
    #[serde(default = "TextFields::preset")]
    pub text_fields: TextFields,
    #[serde(default)]
    pub selections: Selections,
}

impl AssessmentForm {
    /// Preset answers with every control unchecked; also the reset target.
    pub fn preset() -> Self {
        Self {
            text_fields: TextFields::preset(),
            selections: Selections::cleared(),
        }
    }

    pub fn new(text_fields: TextFields, selections: Selections) -> Self {
        Self {
            text_fields,
            selections,
        }
    }
}

impl Default for AssessmentForm {
    fn default() -> Self {
        Self::preset()
    }
}
