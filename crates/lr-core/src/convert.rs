// ── API-to-domain type conversions ──
//
// Bridges raw `lr_api` response types into the domain model. The console
// keys field catalogs by field name and omits it from the value, so the
// key is folded back into each `RegistrationField` here.

use std::collections::BTreeMap;

use lr_api::models::{FeatureFlag, RawApp, RawCustomField, RawFieldMap};

use crate::model::{CustomField, FieldCatalog, RegistrationField, Site, SiteFeatures};

pub fn site_features(flags: Vec<FeatureFlag>) -> SiteFeatures {
    SiteFeatures::from_flags(flags.into_iter().map(|f| (f.feature, f.status)))
}

pub fn field_catalog(raw: RawFieldMap) -> FieldCatalog {
    raw.into_iter()
        .map(|(key, field)| {
            let value = RegistrationField {
                key: key.clone(),
                display: field.display,
                field_type: field.field_type,
            };
            (key, value)
        })
        .collect()
}

pub fn custom_fields(raw: Vec<RawCustomField>) -> Vec<CustomField> {
    raw.into_iter()
        .map(|f| CustomField { display: f.display })
        .collect()
}

impl From<RawApp> for Site {
    fn from(app: RawApp) -> Self {
        Self {
            id: app.app_id,
            name: app.app_name,
            domain: app.domain,
        }
    }
}

/// Index a site list by id. A duplicated id keeps the last entry.
pub fn sites_by_id(raw: Vec<RawApp>) -> BTreeMap<i64, Site> {
    raw.into_iter()
        .map(|app| (app.app_id, Site::from(app)))
        .collect()
}

#[cfg(test)]
mod tests {
    use lr_api::models::RawRegistrationField;

    use super::*;

    #[test]
    fn field_catalog_carries_key() {
        let mut raw = RawFieldMap::new();
        raw.insert(
            "emailid".into(),
            RawRegistrationField {
                display: "Email Id".into(),
                field_type: "email".into(),
            },
        );
        let catalog = field_catalog(raw);
        assert_eq!(catalog["emailid"].key, "emailid");
        assert_eq!(catalog["emailid"].display, "Email Id");
    }

    #[test]
    fn features_drop_disabled_flags() {
        let features = site_features(vec![
            FeatureFlag {
                feature: "phone_id_only_login_enabled".into(),
                status: false,
            },
            FeatureFlag {
                feature: "sso".into(),
                status: true,
            },
        ]);
        assert!(!features.is_phone_login_enabled());
        assert!(features.is_enabled("sso"));
    }
}
