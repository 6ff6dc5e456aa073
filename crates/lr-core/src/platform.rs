// ── Platform abstraction ──
//
// The single entry point the CLI uses to read console state. Owns the API
// client, converts wire types into the domain model and assembles the
// reports. Requests are issued one at a time, in the order listed.

use tracing::{debug, warn};

use lr_api::{AdminClient, TransportConfig};

use crate::config::PlatformConfig;
use crate::convert;
use crate::error::CoreError;
use crate::model::{CustomField, FieldCatalog, SiteFeatures};
use crate::schema::SchemaReport;
use crate::site::SiteCatalog;

/// A console session.
pub struct Platform {
    config: PlatformConfig,
    client: AdminClient,
}

impl Platform {
    /// Build the HTTP client for this session. No request is sent yet.
    pub fn new(config: PlatformConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = AdminClient::new(
            config.api_domain.clone(),
            &config.credentials.token,
            config.credentials.sign.as_ref(),
            &transport,
        )?;
        Ok(Self { config, client })
    }

    // ── Raw reads ────────────────────────────────────────────────

    pub async fn site_features(&self) -> Result<SiteFeatures, CoreError> {
        Ok(convert::site_features(self.client.site_features().await?))
    }

    pub async fn all_registration_fields(&self) -> Result<FieldCatalog, CoreError> {
        Ok(convert::field_catalog(
            self.client.all_registration_fields().await?,
        ))
    }

    pub async fn registration_fields(&self) -> Result<FieldCatalog, CoreError> {
        Ok(convert::field_catalog(self.client.registration_fields().await?))
    }

    pub async fn custom_fields(&self) -> Result<Vec<CustomField>, CoreError> {
        Ok(convert::custom_fields(self.client.custom_fields().await?))
    }

    /// Owned and shared sites.
    pub async fn apps_info(&self) -> Result<SiteCatalog, CoreError> {
        let owned = convert::sites_by_id(self.client.owned_apps().await?);
        let shared = convert::sites_by_id(self.client.shared_apps().await?);
        debug!(owned = owned.len(), shared = shared.len(), "fetched sites");
        Ok(SiteCatalog::new(owned, shared))
    }

    /// The active site id for this session.
    pub fn current_id(&self) -> Result<i64, CoreError> {
        self.config.app_id.ok_or(CoreError::NoActiveSite)
    }

    // ── Reports ──────────────────────────────────────────────────

    /// Fetch everything `get schema` needs and reconcile it.
    ///
    /// Failures of the first three requests abort the report. A failure of
    /// the custom-field request is recorded on the report instead.
    pub async fn schema_report(&self) -> Result<SchemaReport, CoreError> {
        let features = self.site_features().await?;
        let catalog = self.all_registration_fields().await?;
        let active = self.registration_fields().await?;
        debug!(
            catalog = catalog.len(),
            active = active.len(),
            phone_login = features.is_phone_login_enabled(),
            "fetched registration schema"
        );

        let custom = self.custom_fields().await;
        if let Err(ref e) = custom {
            warn!(error = %e, "custom fields unavailable");
        }

        Ok(SchemaReport::build(&features, &catalog, &active, custom))
    }
}
