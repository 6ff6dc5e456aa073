// App (site) endpoints
//
// Apps are account-scoped rather than site-scoped: the same token lists
// every app the caller owns plus every app shared with them.

use tracing::debug;

use crate::client::AdminClient;
use crate::error::Error;
use crate::models::RawApp;

impl AdminClient {
    /// Apps owned by the authenticated account.
    ///
    /// `GET /auth/apps`
    pub async fn owned_apps(&self) -> Result<Vec<RawApp>, Error> {
        debug!("listing owned apps");
        self.get_data("auth/apps").await
    }

    /// Apps other accounts have shared with the authenticated account.
    ///
    /// `GET /auth/apps/shared`
    pub async fn shared_apps(&self) -> Result<Vec<RawApp>, Error> {
        debug!("listing shared apps");
        self.get_data("auth/apps/shared").await
    }
}
