// ── Site selection ──
//
// Owned and shared sites arrive as two id-keyed collections. `get site`
// shows exactly one view of them, chosen by mutually exclusive flags.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::model::Site;

/// `--appid` value meaning "not given".
pub const APPID_UNSET: i64 = -1;

/// Which sites to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteSelection {
    /// The site the session is currently working on.
    Active,
    /// Every owned and shared site.
    All,
    /// One site by app id.
    ById(i64),
}

impl SiteSelection {
    /// Interpret the `--all` / `--active` / `--appid` flags.
    ///
    /// Returns `None` unless exactly one of them is set.
    pub fn from_flags(all: bool, active: bool, appid: i64) -> Option<Self> {
        let by_id = (appid != APPID_UNSET).then_some(appid);
        match (all, active, by_id) {
            (true, false, None) => Some(Self::All),
            (false, true, None) => Some(Self::Active),
            (false, false, Some(id)) => Some(Self::ById(id)),
            _ => None,
        }
    }
}

/// Result of applying a `SiteSelection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SiteView<'a> {
    Single(&'a Site),
    All {
        owned: Vec<&'a Site>,
        shared: Vec<&'a Site>,
    },
}

/// Sites visible to the caller, split by ownership.
#[derive(Debug, Clone, Default)]
pub struct SiteCatalog {
    pub owned: BTreeMap<i64, Site>,
    pub shared: BTreeMap<i64, Site>,
}

impl SiteCatalog {
    pub fn new(owned: BTreeMap<i64, Site>, shared: BTreeMap<i64, Site>) -> Self {
        Self { owned, shared }
    }

    /// Look up a site by id, owned sites first.
    pub fn find(&self, app_id: i64) -> Result<&Site, CoreError> {
        self.owned
            .get(&app_id)
            .or_else(|| self.shared.get(&app_id))
            .ok_or(CoreError::SiteNotFound { app_id })
    }

    /// Look up the active site, shared sites first.
    pub fn active(&self, app_id: i64) -> Result<&Site, CoreError> {
        self.shared
            .get(&app_id)
            .or_else(|| self.owned.get(&app_id))
            .ok_or(CoreError::ActiveSiteNotFound { app_id })
    }

    /// Apply a selection. `current_id` is only consulted for
    /// `SiteSelection::Active`.
    pub fn select(
        &self,
        selection: SiteSelection,
        current_id: impl FnOnce() -> Result<i64, CoreError>,
    ) -> Result<SiteView<'_>, CoreError> {
        match selection {
            SiteSelection::Active => self.active(current_id()?).map(SiteView::Single),
            SiteSelection::ById(id) => self.find(id).map(SiteView::Single),
            SiteSelection::All => Ok(SiteView::All {
                owned: self.owned.values().collect(),
                shared: self.shared.values().collect(),
            }),
        }
    }
}
