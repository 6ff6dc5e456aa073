// lr-core: Domain layer between lr-api and the CLI.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod platform;
pub mod schema;
pub mod site;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{Credentials, PlatformConfig};
pub use error::CoreError;
pub use platform::Platform;

pub use model::{CustomField, FieldCatalog, RegistrationField, Site, SiteFeatures};
pub use schema::{CustomFieldRow, FieldRow, SchemaReport, custom_field_rows, standard_field_rows};
pub use site::{APPID_UNSET, SiteCatalog, SiteSelection, SiteView};
