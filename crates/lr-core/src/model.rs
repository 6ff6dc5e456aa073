// ── Domain types ──
//
// Read-only snapshots of console state. Nothing here outlives a single
// command invocation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Feature flags that switch phone-number login on.
pub const PHONE_LOGIN_FEATURES: [&str; 2] = [
    "phone_id_and_email_id_login_enabled",
    "phone_id_only_login_enabled",
];

/// Capabilities enabled for the current site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteFeatures {
    enabled: BTreeSet<String>,
}

impl SiteFeatures {
    /// Build from `(name, status)` pairs; only flags with status `true` are
    /// kept.
    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            enabled: flags
                .into_iter()
                .filter(|(_, on)| *on)
                .map(|(name, _)| name.into())
                .collect(),
        }
    }

    pub fn is_enabled(&self, feature: &str) -> bool {
        self.enabled.contains(feature)
    }

    /// Whether users can log in with a phone number. Gates the `phoneid`
    /// registration field.
    pub fn is_phone_login_enabled(&self) -> bool {
        PHONE_LOGIN_FEATURES.iter().any(|f| self.is_enabled(f))
    }
}

/// A registration form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationField {
    /// Stable field key (e.g. `emailid`).
    pub key: String,
    /// Human-readable label.
    pub display: String,
    /// Declared type (`password`, `email`, `string`, `multi`, ...).
    pub field_type: String,
}

/// Registration fields keyed by stable key, iterated in key order.
pub type FieldCatalog = BTreeMap<String, RegistrationField>;

/// A tenant-defined custom field. Its type and enabled state live in the
/// active field catalog, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub display: String,
}

impl CustomField {
    /// Key under which this field appears in the active catalog.
    pub fn catalog_key(&self) -> String {
        format!("cf_{}", self.display)
    }
}

/// A site (app) on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub name: String,
    pub domain: String,
}
