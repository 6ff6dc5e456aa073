// ── Schema reconciliation ──
//
// Joins the feature flags, the full field catalog, the active subset and
// the custom-field list into the rows shown by `get schema`.

use serde::Serialize;

use crate::error::CoreError;
use crate::model::{CustomField, FieldCatalog, SiteFeatures};

/// Key of the synthetic phone-number field.
pub const PHONE_FIELD_KEY: &str = "phoneid";

/// One row of the standard-field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub name: String,
    pub display: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub enabled: bool,
}

/// One row of the custom-field table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomFieldRow {
    pub display: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub enabled: bool,
}

/// User-facing name for a declared field type.
pub fn display_type(field_type: &str) -> &str {
    if field_type == "multi" {
        "checkbox"
    } else {
        field_type
    }
}

/// Rows for every catalog field, enabled rows first.
///
/// `phoneid` is dropped while phone login is off. Within the enabled and
/// disabled groups rows keep catalog (key) order.
pub fn standard_field_rows(
    features: &SiteFeatures,
    catalog: &FieldCatalog,
    active: &FieldCatalog,
) -> Vec<FieldRow> {
    let phone_login = features.is_phone_login_enabled();

    let mut rows: Vec<FieldRow> = catalog
        .iter()
        .filter(|(key, _)| phone_login || key.as_str() != PHONE_FIELD_KEY)
        .map(|(key, field)| FieldRow {
            name: key.clone(),
            display: field.display.clone(),
            field_type: display_type(&field.field_type).to_owned(),
            enabled: active.contains_key(key),
        })
        .collect();

    // stable: equal keys keep their relative order
    rows.sort_by_key(|row| !row.enabled);
    rows
}

/// Rows for the custom fields, in the order the console returned them.
///
/// Type and enabled state come from the active catalog entry
/// `cf_<display>`; a field with no such entry is disabled with an empty type.
pub fn custom_field_rows(custom: &[CustomField], active: &FieldCatalog) -> Vec<CustomFieldRow> {
    custom
        .iter()
        .map(|field| {
            let entry = active.get(&field.catalog_key());
            CustomFieldRow {
                display: field.display.clone(),
                field_type: entry.map(|f| f.field_type.clone()).unwrap_or_default(),
                enabled: entry.is_some(),
            }
        })
        .collect()
}

/// Everything `get schema` renders.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaReport {
    pub fields: Vec<FieldRow>,
    pub custom_fields: Vec<CustomFieldRow>,
    /// Set when the custom-field list could not be fetched. The standard
    /// rows are still valid in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields_error: Option<String>,
}

impl SchemaReport {
    pub fn build(
        features: &SiteFeatures,
        catalog: &FieldCatalog,
        active: &FieldCatalog,
        custom: Result<Vec<CustomField>, CoreError>,
    ) -> Self {
        let fields = standard_field_rows(features, catalog, active);
        match custom {
            Ok(custom) => Self {
                fields,
                custom_fields: custom_field_rows(&custom, active),
                custom_fields_error: None,
            },
            Err(e) => Self {
                fields,
                custom_fields: Vec::new(),
                custom_fields_error: Some(e.to_string()),
            },
        }
    }

    /// No custom fields exist and none failed to load.
    pub fn has_no_custom_fields(&self) -> bool {
        self.custom_fields.is_empty() && self.custom_fields_error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::RegistrationField;

    fn field(key: &str, display: &str, field_type: &str) -> (String, RegistrationField) {
        (
            key.to_owned(),
            RegistrationField {
                key: key.to_owned(),
                display: display.to_owned(),
                field_type: field_type.to_owned(),
            },
        )
    }

    fn catalog(fields: &[(&str, &str, &str)]) -> FieldCatalog {
        fields.iter().map(|(k, d, t)| field(k, d, t)).collect()
    }

    fn phone_login() -> SiteFeatures {
        SiteFeatures::from_flags([("phone_id_and_email_id_login_enabled", true)])
    }

    #[test]
    fn email_enabled_lastname_disabled() {
        let all = catalog(&[
            ("emailid", "Email Id", "email"),
            ("lastname", "Last Name", "string"),
        ]);
        let active = catalog(&[("emailid", "Email Id", "email")]);

        let rows = standard_field_rows(&SiteFeatures::default(), &all, &active);

        assert_eq!(
            rows,
            vec![
                FieldRow {
                    name: "emailid".into(),
                    display: "Email Id".into(),
                    field_type: "email".into(),
                    enabled: true,
                },
                FieldRow {
                    name: "lastname".into(),
                    display: "Last Name".into(),
                    field_type: "string".into(),
                    enabled: false,
                },
            ]
        );
    }

    #[test]
    fn enabled_rows_come_first_in_key_order() {
        let all = catalog(&[
            ("a", "A", "string"),
            ("b", "B", "string"),
            ("c", "C", "string"),
            ("d", "D", "string"),
            ("e", "E", "string"),
        ]);
        let active = catalog(&[("d", "D", "string"), ("b", "B", "string")]);

        let rows = standard_field_rows(&SiteFeatures::default(), &all, &active);
        let order: Vec<_> = rows.iter().map(|r| (r.name.as_str(), r.enabled)).collect();

        assert_eq!(
            order,
            vec![
                ("b", true),
                ("d", true),
                ("a", false),
                ("c", false),
                ("e", false),
            ]
        );
    }

    #[test]
    fn enabled_flag_is_active_membership() {
        let all = catalog(&[
            ("birthdate", "Date of Birth", "string"),
            ("country", "Country", "string"),
            ("password", "Password", "password"),
        ]);
        let active = catalog(&[("password", "Password", "password"), ("unrelated", "X", "string")]);

        for row in standard_field_rows(&SiteFeatures::default(), &all, &active) {
            assert_eq!(row.enabled, active.contains_key(&row.name), "row {}", row.name);
        }
    }

    #[test]
    fn phoneid_hidden_without_phone_login() {
        let all = catalog(&[("emailid", "Email Id", "email"), ("phoneid", "Phone Id", "string")]);
        let active = catalog(&[("phoneid", "Phone Id", "string")]);

        let rows = standard_field_rows(&SiteFeatures::default(), &all, &active);
        assert!(rows.iter().all(|r| r.name != "phoneid"));
    }

    #[test]
    fn phoneid_shown_with_phone_login_even_if_disabled() {
        let all = catalog(&[("emailid", "Email Id", "email"), ("phoneid", "Phone Id", "string")]);
        let active = catalog(&[("emailid", "Email Id", "email")]);

        let rows = standard_field_rows(&phone_login(), &all, &active);
        let phone = rows.iter().find(|r| r.name == "phoneid");
        assert_eq!(phone.map(|r| r.enabled), Some(false));
    }

    #[test]
    fn phone_only_login_also_counts() {
        let features = SiteFeatures::from_flags([("phone_id_only_login_enabled", true)]);
        assert!(features.is_phone_login_enabled());
        let off = SiteFeatures::from_flags([("phone_id_only_login_enabled", false)]);
        assert!(!off.is_phone_login_enabled());
    }

    #[test]
    fn multi_is_shown_as_checkbox() {
        let all = catalog(&[
            ("gender", "Gender", "multi"),
            ("hobbies", "Hobbies", "multiselect"),
            ("email", "Email", "email"),
        ]);
        let rows = standard_field_rows(&SiteFeatures::default(), &all, &FieldCatalog::new());
        let types: Vec<_> = rows
            .iter()
            .map(|r| (r.name.as_str(), r.field_type.as_str()))
            .collect();
        assert_eq!(
            types,
            vec![
                ("email", "email"),
                ("gender", "checkbox"),
                ("hobbies", "multiselect"),
            ]
        );
    }

    #[test]
    fn custom_rows_resolve_through_prefixed_key() {
        let custom = vec![
            CustomField {
                display: "MyCF".into(),
            },
            CustomField {
                display: "Other".into(),
            },
        ];
        let active = catalog(&[("cf_MyCF", "MyCF", "string"), ("Other", "Other", "string")]);

        let rows = custom_field_rows(&custom, &active);

        assert_eq!(
            rows,
            vec![
                CustomFieldRow {
                    display: "MyCF".into(),
                    field_type: "string".into(),
                    enabled: true,
                },
                CustomFieldRow {
                    display: "Other".into(),
                    field_type: String::new(),
                    enabled: false,
                },
            ]
        );
    }

    #[test]
    fn report_keeps_standard_rows_when_custom_fetch_fails() {
        let all = catalog(&[("emailid", "Email Id", "email")]);
        let report = SchemaReport::build(
            &SiteFeatures::default(),
            &all,
            &FieldCatalog::new(),
            Err(CoreError::Timeout { timeout_secs: 30 }),
        );

        assert_eq!(report.fields.len(), 1);
        assert!(report.custom_fields.is_empty());
        assert!(!report.has_no_custom_fields());
        assert_eq!(
            report.custom_fields_error.as_deref(),
            Some("Request timed out after 30s")
        );
    }

    #[test]
    fn report_without_custom_fields() {
        let report = SchemaReport::build(
            &SiteFeatures::default(),
            &FieldCatalog::new(),
            &FieldCatalog::new(),
            Ok(Vec::new()),
        );
        assert!(report.has_no_custom_fields());
    }
}
