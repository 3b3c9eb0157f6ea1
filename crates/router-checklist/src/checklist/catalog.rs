use super::domain::{Category, ControlItem, ControlKey};

/// Ordered, read-only view over the router hardening controls.
#[derive(Debug, Clone, Copy)]
pub struct ChecklistCatalog {
    items: &'static [ControlItem],
}

impl ChecklistCatalog {
    pub fn standard() -> Self {
        Self {
            items: &CONTROL_ITEMS,
        }
    }

    pub fn items(&self) -> &'static [ControlItem] {
        self.items
    }

    pub fn items_in(&self, category: Category) -> Vec<&'static ControlItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    pub fn get(&self, key: ControlKey) -> Option<&'static ControlItem> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ChecklistCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Every control, in declaration order. This is the universe scores are computed against.
pub fn control_catalog() -> &'static [ControlItem] {
    &CONTROL_ITEMS
}

static CONTROL_ITEMS: [ControlItem; 31] = [
    ControlItem {
        key: ControlKey::GvRolesDefined,
        category: Category::Govern,
        description: "Authorized admin owner + no shared admin (only trusted users can change router settings)",
        localized_description: "កំណត់ម្ចាស់ admin + មិនប្រើ admin រួម (មានតែអ្នកទុកចិត្តអាចប្ដូរ settings router)",
    },
    ControlItem {
        key: ControlKey::GvVendorUpdates,
        category: Category::Govern,
        description: "Vendor/ISP lifecycle + update policy (support window, update method, who is responsible for patching)",
        localized_description: "វដ្ដជីវិត/គាំទ្រ + គោលការណ៍អាប់ដេតពី vendor/ISP (គាំទ្ររយៈពេល, វិធីអាប់ដេត, អ្នកទទួលខុសត្រូវ patch)",
    },
    ControlItem {
        key: ControlKey::GvDataPolicy,
        category: Category::Govern,
        description: "Secure baseline documented (approved settings standard; disable unnecessary features/interfaces by default)",
        localized_description: "កត់ត្រា baseline សុវត្ថិភាព (ស្តង់ដារ settings; បិទ features/interfaces មិនចាំបាច់តាមលំនាំដើម)",
    },
    ControlItem {
        key: ControlKey::GvAccountRecovery,
        category: Category::Govern,
        description: "Recovery/reset governance (secure factory reset steps + protect admin recovery info from misuse)",
        localized_description: "គោលការណ៍ស្ដារ/reset (ជំហាន factory reset មានសុវត្ថិភាព + ការពារ recovery info មិនឲ្យត្រូវបំពាន)",
    },
    ControlItem {
        key: ControlKey::IdInventory,
        category: Category::Identify,
        description: "Router identification recorded (model/serial + firmware version for tracking and audits)",
        localized_description: "កត់ត្រា router (model/serial + version firmware សម្រាប់តាមដាន និង audit)",
    },
    ControlItem {
        key: ControlKey::IdNetworkMap,
        category: Category::Identify,
        description: "Network topology documented (WAN/LAN/Guest/IoT/VLAN + where admin access is allowed from)",
        localized_description: "កត់ត្រា topology បណ្ដាញ (WAN/LAN/Guest/IoT/VLAN + កន្លែងអនុញ្ញាតចូល admin)",
    },
    ControlItem {
        key: ControlKey::IdDataInventory,
        category: Category::Identify,
        description: "Connected device inventory maintained (approved list; identify unknown devices quickly)",
        localized_description: "រក្សាបញ្ជីឧបករណ៍ភ្ជាប់ (approved list; រកឃើញ unknown devices ឲ្យលឿន)",
    },
    ControlItem {
        key: ControlKey::IdRiskScenarios,
        category: Category::Identify,
        description: "Attack surface review (remote admin, open ports, UPnP/WPS, unused services/features minimized)",
        localized_description: "ពិនិត្យ surface វាយប្រហារ (remote admin, ports បើក, UPnP/WPS, កាត់បន្ថយ services/features មិនប្រើ)",
    },
    ControlItem {
        key: ControlKey::IdCoveragePlan,
        category: Category::Identify,
        description: "Wi-Fi coverage plan (router/AP placement avoids dead zones; basic layout documented)",
        localized_description: "ផែនការគ្របដណ្តប់សញ្ញា (ដាក់ router/AP ឲ្យជៀស dead zone; កត់ត្រាផែនទីសាមញ្ញ)",
    },
    ControlItem {
        key: ControlKey::PrStrongPasswords,
        category: Category::Protect,
        description: "Strong admin credentials (unique long password; change if risk suspected)",
        localized_description: "Credentials admin ខ្លាំង (password វែង និងមិនស្ទួន; ប្ដូរពេលសង្ស័យហានិភ័យ)",
    },
    ControlItem {
        key: ControlKey::PrMfa,
        category: Category::Protect,
        description: "Admin access hardened (disable WAN/remote admin; manage from LAN only; use VPN if remote is needed)",
        localized_description: "តឹងការចូល admin (បិទ WAN/remote admin; អនុញ្ញាតតែ LAN; ប្រើ VPN បើចាំបាច់ពីចម្ងាយ)",
    },
    ControlItem {
        key: ControlKey::PrNoDefaultCreds,
        category: Category::Protect,
        description: "No default credentials (change default admin + Wi-Fi SSID/password)",
        localized_description: "មិនប្រើ default creds (ប្ដូរ admin login + Wi-Fi SSID/password)",
    },
    ControlItem {
        key: ControlKey::PrAutoUpdates,
        category: Category::Protect,
        description: "Secure firmware updates (auto-update or scheduled patching; prefer vendor-signed firmware)",
        localized_description: "អាប់ដេត firmware សុវត្ថិភាព (auto ឬ schedule; ជ្រើស firmware signed/verified ពី vendor)",
    },
    ControlItem {
        key: ControlKey::PrSecureConfig,
        category: Category::Protect,
        description: "Secure baseline config (disable WPS/UPnP; disable WEP/TKIP; use WPA2/WPA3)",
        localized_description: "Baseline config សុវត្ថិភាព (បិទ WPS/UPnP; បិទ WEP/TKIP; ប្រើ WPA2/WPA3)",
    },
    ControlItem {
        key: ControlKey::PrNetworkIsolation,
        category: Category::Protect,
        description: "Network segmentation (Guest Wi-Fi / IoT VLAN; keep admin devices on trusted segment)",
        localized_description: "បំបែកបណ្ដាញ (Guest Wi-Fi / IoT VLAN; ដាក់ admin devices នៅ segment ទុកចិត្ត)",
    },
    ControlItem {
        key: ControlKey::PrNoPortForward,
        category: Category::Protect,
        description: "Inbound access restricted (avoid port forwarding; if required, document/limit and review regularly)",
        localized_description: "កំណត់ inbound access (ជៀស port forwarding; បើចាំបាច់ ត្រូវកត់ត្រា/កំណត់តឹង និងពិនិត្យជាប្រចាំ)",
    },
    ControlItem {
        key: ControlKey::PrEncryptRetention,
        category: Category::Protect,
        description: "Secure management & data handling (HTTPS admin UI; backup config safely; minimize retained logs/data)",
        localized_description: "ការពារ management & ទិន្នន័យ (HTTPS admin UI; backup config សុវត្ថិភាព; រក្សា logs/data លើឧបករណ៍ឲ្យតិច)",
    },
    ControlItem {
        key: ControlKey::PrSsidNoPersonalInfo,
        category: Category::Protect,
        description: "Wi-Fi name (SSID) does NOT include personal information (name/address/unit)",
        localized_description: "ឈ្មោះ Wi-Fi (SSID) មិនបញ្ចូលព័ត៌មានផ្ទាល់ខ្លួន (ឈ្មោះ/អាសយដ្ឋាន/លេខបន្ទប់)",
    },
    ControlItem {
        key: ControlKey::PrPhysicalSecurity,
        category: Category::Protect,
        description: "Router placed in a secure physical location (not easy for others to access/reset)",
        localized_description: "ដាក់ router កន្លែងមានសុវត្ថិភាព (មិនងាយឲ្យអ្នកផ្សេងប៉ះ/ចុច reset)",
    },
    ControlItem {
        key: ControlKey::PrChannelPlan,
        category: Category::Protect,
        description: "Channel/interference tuned (2.4/5GHz optimized; avoid congested channels)",
        localized_description: "កែ channel/រំខានសញ្ញា (optimize 2.4/5GHz; ជៀស channel កកស្ទះ)",
    },
    ControlItem {
        key: ControlKey::PrQosPolicy,
        category: Category::Protect,
        description: "QoS/traffic priority set (video calls/learning/work get priority if needed)",
        localized_description: "កំណត់ QoS/អាទិភាព traffic (video call/រៀន/ការងារ មានអាទិភាពបើចាំបាច់)",
    },
    ControlItem {
        key: ControlKey::PrPowerProtection,
        category: Category::Protect,
        description: "Power protection (surge protector or UPS for router/modem to reduce outages and damage)",
        localized_description: "ការពារថាមពល (surge protector ឬ UPS សម្រាប់ router/modem ដើម្បីកាត់បន្ថយដាច់ភ្លើង និងខូចខាត)",
    },
    ControlItem {
        key: ControlKey::DeAlerts,
        category: Category::Detect,
        description: "Alerts/logs enabled (admin logins, config changes, new device joins, update events where supported)",
        localized_description: "បើក alerts/logs (admin logins, ប្ដូរ config, ឧបករណ៍ថ្មីចូល, update events បើគាំទ្រ)",
    },
    ControlItem {
        key: ControlKey::DeDeviceHealth,
        category: Category::Detect,
        description: "Detect unknown devices (monitor joins; quickly block/kick rogue devices; review client list)",
        localized_description: "រកឃើញឧបករណ៍មិនស្គាល់ (តាមដានការភ្ជាប់; អាច block/kick បានលឿន; ពិនិត្យ client list)",
    },
    ControlItem {
        key: ControlKey::DeLogReview,
        category: Category::Detect,
        description: "Log review routine (review regularly; export to syslog/cloud/screenshot if logging is limited)",
        localized_description: "របៀបពិនិត្យ logs (ពិនិត្យជាប្រចាំ; export ទៅ syslog/cloud/ថតរូប ប្រសិនបើ logs មានកម្រិត)",
    },
    ControlItem {
        key: ControlKey::DePerformanceMonitoring,
        category: Category::Detect,
        description: "Performance monitoring routine (monthly speed/latency test; record results for trends)",
        localized_description: "តាមដាន performance (តេស្ត speed/latency ប្រចាំខែ; កត់ត្រាលទ្ធផលសម្រាប់មើល trend)",
    },
    ControlItem {
        key: ControlKey::RsTakeoverPlan,
        category: Category::Respond,
        description: "Incident response actions (rotate admin/Wi-Fi passwords; disable remote admin/UPnP; patch firmware; review devices)",
        localized_description: "សកម្មភាពឆ្លើយតប (ប្ដូរ admin/Wi-Fi passwords; បិទ remote admin/UPnP; patch firmware; ពិនិត្យ devices)",
    },
    ControlItem {
        key: ControlKey::RsIsolationPlan,
        category: Category::Respond,
        description: "Containment steps (block device; isolate IoT/Guest; disable SSID temporarily; export logs for investigation)",
        localized_description: "ជំហានទប់ស្កាត់ (block device; ផ្ដាច់ IoT/Guest; បិទ SSID បណ្ដោះអាសន្ន; export logs សម្រាប់ស៊ើបអង្កេត)",
    },
    ControlItem {
        key: ControlKey::RcBackupAccess,
        category: Category::Recover,
        description: "Recovery material stored safely (config backup + admin recovery info protected/offline)",
        localized_description: "រក្សា recovery material ឲ្យសុវត្ថិភាព (backup config + recovery info ការពារ/ទុកក្រៅបណ្ដាញ)",
    },
    ControlItem {
        key: ControlKey::RcRebuildSteps,
        category: Category::Recover,
        description: "Rebuild playbook (factory reset → secure baseline → segmentation → update firmware → verify alerts/logs)",
        localized_description: "ផែនការស្ដារ (factory reset → baseline សុវត្ថិភាព → segmentation → update firmware → បញ្ជាក់ alerts/logs)",
    },
    ControlItem {
        key: ControlKey::RcBackupInternet,
        category: Category::Recover,
        description: "Backup connectivity plan (4G/5G hotspot/failover ready; steps documented for downtime)",
        localized_description: "ផែនការបណ្ដាញបម្រុង (hotspot/failover 4G/5G ត្រៀមរួច; កត់ត្រាជំហានពេលបណ្ដាញដាច់)",
    },
];
