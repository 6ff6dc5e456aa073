// Registration schema endpoints
//
// Feature flags, the full field catalog, the fields active on the
// registration form and the tenant's custom fields. All are scoped to the
// site the session token belongs to.

use tracing::debug;

use crate::client::AdminClient;
use crate::error::Error;
use crate::models::{FeatureFlag, RawCustomField, RawFieldMap};

impl AdminClient {
    /// Feature flags enabled for the current site.
    ///
    /// `GET /auth/features`
    pub async fn site_features(&self) -> Result<Vec<FeatureFlag>, Error> {
        debug!("fetching site features");
        self.get_data("auth/features").await
    }

    /// Every registration field the platform supports.
    ///
    /// `GET /platform-configuration/default-fields`
    pub async fn all_registration_fields(&self) -> Result<RawFieldMap, Error> {
        debug!("fetching registration field catalog");
        self.get_data("platform-configuration/default-fields").await
    }

    /// Fields currently enabled on the site's registration form. Enabled
    /// custom fields appear here under `cf_<display>`.
    ///
    /// `GET /platform-configuration/registration-form-settings`
    pub async fn registration_fields(&self) -> Result<RawFieldMap, Error> {
        debug!("fetching active registration fields");
        self.get_data("platform-configuration/registration-form-settings")
            .await
    }

    /// Custom fields defined for the site, in console order.
    ///
    /// `GET /platform-configuration/custom-fields`
    pub async fn custom_fields(&self) -> Result<Vec<RawCustomField>, Error> {
        debug!("fetching custom fields");
        self.get_data("platform-configuration/custom-fields").await
    }
}
