use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Governance phase a control belongs to. Used for grouping and display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Govern,
    Identify,
    Protect,
    Detect,
    Respond,
    Recover,
}

impl Category {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Govern,
            Self::Identify,
            Self::Protect,
            Self::Detect,
            Self::Respond,
            Self::Recover,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Govern => "GV",
            Self::Identify => "ID",
            Self::Protect => "PR",
            Self::Detect => "DE",
            Self::Respond => "RS",
            Self::Recover => "RC",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Govern => "Govern",
            Self::Identify => "Identify",
            Self::Protect => "Protect",
            Self::Detect => "Detect",
            Self::Respond => "Respond",
            Self::Recover => "Recover",
        }
    }
}

/// Supported locale tags for labels and checklist descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Km,
}

impl Language {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Km => "km",
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Km,
            Self::Km => Self::En,
        }
    }
}

impl FromStr for Language {
    type Err = ChecklistError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "km" => Ok(Self::Km),
            other => Err(ChecklistError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Free-text inputs captured on the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    SystemType,
    Hardware,
    Software,
    Data,
    Privacy,
    Metric,
    Alignment,
}

impl TextField {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::SystemType,
            Self::Hardware,
            Self::Software,
            Self::Data,
            Self::Privacy,
            Self::Metric,
            Self::Alignment,
        ]
    }

    /// Fields whose presence gates a passing verdict. `Alignment` is informational.
    pub const fn required() -> [Self; 6] {
        [
            Self::SystemType,
            Self::Hardware,
            Self::Software,
            Self::Data,
            Self::Privacy,
            Self::Metric,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemType => "systemType",
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::Data => "data",
            Self::Privacy => "privacy",
            Self::Metric => "metric",
            Self::Alignment => "alignment",
        }
    }
}

impl FromStr for TextField {
    type Err = ChecklistError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ChecklistError::UnknownField(trimmed.to_string()))
    }
}

/// Identity of every control in the catalog, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ControlKey {
    #[serde(rename = "gv_rolesDefined")]
    GvRolesDefined,
    #[serde(rename = "gv_vendorUpdates")]
    GvVendorUpdates,
    #[serde(rename = "gv_dataPolicy")]
    GvDataPolicy,
    #[serde(rename = "gv_accountRecovery")]
    GvAccountRecovery,
    #[serde(rename = "id_inventory")]
    IdInventory,
    #[serde(rename = "id_networkMap")]
    IdNetworkMap,
    #[serde(rename = "id_dataInventory")]
    IdDataInventory,
    #[serde(rename = "id_riskScenarios")]
    IdRiskScenarios,
    #[serde(rename = "id_coveragePlan")]
    IdCoveragePlan,
    #[serde(rename = "pr_strongPasswords")]
    PrStrongPasswords,
    #[serde(rename = "pr_mfa")]
    PrMfa,
    #[serde(rename = "pr_noDefaultCreds")]
    PrNoDefaultCreds,
    #[serde(rename = "pr_autoUpdates")]
    PrAutoUpdates,
    #[serde(rename = "pr_secureConfig")]
    PrSecureConfig,
    #[serde(rename = "pr_networkIsolation")]
    PrNetworkIsolation,
    #[serde(rename = "pr_noPortForward")]
    PrNoPortForward,
    #[serde(rename = "pr_encryptRetention")]
    PrEncryptRetention,
    #[serde(rename = "pr_ssidNoPersonalInfo")]
    PrSsidNoPersonalInfo,
    #[serde(rename = "pr_physicalSecurity")]
    PrPhysicalSecurity,
    #[serde(rename = "pr_channelPlan")]
    PrChannelPlan,
    #[serde(rename = "pr_qosPolicy")]
    PrQosPolicy,
    #[serde(rename = "pr_powerProtection")]
    PrPowerProtection,
    #[serde(rename = "de_alerts")]
    DeAlerts,
    #[serde(rename = "de_deviceHealth")]
    DeDeviceHealth,
    #[serde(rename = "de_logReview")]
    DeLogReview,
    #[serde(rename = "de_performanceMonitoring")]
    DePerformanceMonitoring,
    #[serde(rename = "rs_takeoverPlan")]
    RsTakeoverPlan,
    #[serde(rename = "rs_isolationPlan")]
    RsIsolationPlan,
    #[serde(rename = "rc_backupAccess")]
    RcBackupAccess,
    #[serde(rename = "rc_rebuildSteps")]
    RcRebuildSteps,
    #[serde(rename = "rc_backupInternet")]
    RcBackupInternet,
}

impl ControlKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GvRolesDefined => "gv_rolesDefined",
            Self::GvVendorUpdates => "gv_vendorUpdates",
            Self::GvDataPolicy => "gv_dataPolicy",
            Self::GvAccountRecovery => "gv_accountRecovery",
            Self::IdInventory => "id_inventory",
            Self::IdNetworkMap => "id_networkMap",
            Self::IdDataInventory => "id_dataInventory",
            Self::IdRiskScenarios => "id_riskScenarios",
            Self::IdCoveragePlan => "id_coveragePlan",
            Self::PrStrongPasswords => "pr_strongPasswords",
            Self::PrMfa => "pr_mfa",
            Self::PrNoDefaultCreds => "pr_noDefaultCreds",
            Self::PrAutoUpdates => "pr_autoUpdates",
            Self::PrSecureConfig => "pr_secureConfig",
            Self::PrNetworkIsolation => "pr_networkIsolation",
            Self::PrNoPortForward => "pr_noPortForward",
            Self::PrEncryptRetention => "pr_encryptRetention",
            Self::PrSsidNoPersonalInfo => "pr_ssidNoPersonalInfo",
            Self::PrPhysicalSecurity => "pr_physicalSecurity",
            Self::PrChannelPlan => "pr_channelPlan",
            Self::PrQosPolicy => "pr_qosPolicy",
            Self::PrPowerProtection => "pr_powerProtection",
            Self::DeAlerts => "de_alerts",
            Self::DeDeviceHealth => "de_deviceHealth",
            Self::DeLogReview => "de_logReview",
            Self::DePerformanceMonitoring => "de_performanceMonitoring",
            Self::RsTakeoverPlan => "rs_takeoverPlan",
            Self::RsIsolationPlan => "rs_isolationPlan",
            Self::RcBackupAccess => "rc_backupAccess",
            Self::RcRebuildSteps => "rc_rebuildSteps",
            Self::RcBackupInternet => "rc_backupInternet",
        }
    }
}

impl FromStr for ControlKey {
    type Err = ChecklistError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        super::catalog::control_catalog()
            .iter()
            .map(|item| item.key)
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| ChecklistError::UnknownControl(trimmed.to_string()))
    }
}

impl fmt::Display for ControlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One checklist entry. Instances live in the static catalog and are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlItem {
    pub key: ControlKey,
    pub category: Category,
    pub description: &'static str,
    pub localized_description: &'static str,
}

impl ControlItem {
    pub const fn description_for(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.description,
            Language::Km => self.localized_description,
        }
    }
}

/// Errors raised while interpreting external input (request bodies, CLI flags).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    #[error("unknown checklist control '{0}'")]
    UnknownControl(String),
    #[error("unsupported language '{0}' (expected en or km)")]
    UnsupportedLanguage(String),
    #[error("unknown text field '{0}'")]
    UnknownField(String),
}
