// Admin-console API response types
//
// The console wraps every payload in a `{ "Data": ... }` object and uses
// PascalCase field names, except for the feature list which is lower-case.
// Fields use `#[serde(default)]` liberally because the console omits empty
// values instead of sending nulls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard console response envelope: `{ "Data": <T> }`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(rename = "Data", default)]
    pub data: T,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// ── Features ─────────────────────────────────────────────────────────

/// One entry from `/auth/features`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlag {
    pub feature: String,
    #[serde(default)]
    pub status: bool,
}

// ── Registration schema ──────────────────────────────────────────────

/// A registration field as described by the console.
///
/// Keyed by its stable field name in the enclosing map, so the key itself is
/// not repeated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RawRegistrationField {
    #[serde(default)]
    pub display: String,
    #[serde(default, rename = "Type")]
    pub field_type: String,
}

/// Field catalog keyed by stable field name. Ordered so that iteration is
/// reproducible.
pub type RawFieldMap = BTreeMap<String, RawRegistrationField>;

/// A tenant-defined custom field from `/platform-configuration/custom-fields`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawCustomField {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub display: String,
}

// ── Apps ─────────────────────────────────────────────────────────────

/// A site (app) from `/auth/apps` or `/auth/apps/shared`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawApp {
    pub app_id: i64,
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub domain: String,
}
