//! `get site` handler.

use std::fmt::Write as _;

use tabled::Tabled;

use lr_core::{Site, SiteSelection, SiteView};

use crate::cli::{GlobalOpts, SiteArgs};
use crate::error::CliError;
use crate::output;

/// Printed when zero or several selection flags are given.
pub const USAGE_HINT: &str = "Use exactly one of the following flags:\n\
    --all: Displays all sites\n\
    --active: Displays active site\n\
    --appid: Displays site with entered appid";

const DETAIL_RULE: &str = "------------------------------";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DOMAIN")]
    domain: String,
}

impl From<&&Site> for SiteRow {
    fn from(s: &&Site) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            domain: s.domain.clone(),
        }
    }
}

// ── Rendering ───────────────────────────────────────────────────────

fn render_detail(site: &Site) -> String {
    format!(
        "{DETAIL_RULE}\nApp Name: {}\nApp ID: {}\nDomain: {}",
        site.name, site.id, site.domain
    )
}

fn render_view(view: &SiteView<'_>, selection: SiteSelection, color: bool) -> String {
    match view {
        SiteView::Single(site) => {
            let detail = render_detail(site);
            if selection == SiteSelection::Active {
                format!("{}\n{detail}", output::heading("Active site:", color))
            } else {
                detail
            }
        }
        SiteView::All { owned, shared } => {
            let mut out = output::heading("All sites:", color);
            if !owned.is_empty() {
                let rows: Vec<SiteRow> = owned.iter().map(SiteRow::from).collect();
                let _ = write!(
                    out,
                    "\n{}\n{}",
                    output::heading("Your sites:", color),
                    output::render_table(&rows)
                );
            }
            if !shared.is_empty() {
                let rows: Vec<SiteRow> = shared.iter().map(SiteRow::from).collect();
                let _ = write!(
                    out,
                    "\n{}\n{}",
                    output::heading("Shared sites:", color),
                    output::render_table(&rows)
                );
            }
            out
        }
    }
}

/// App ids, one per line.
fn render_plain(view: &SiteView<'_>) -> String {
    match view {
        SiteView::Single(site) => site.id.to_string(),
        SiteView::All { owned, shared } => owned
            .iter()
            .chain(shared.iter())
            .map(|s| s.id.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: SiteArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let Some(selection) = SiteSelection::from_flags(args.all, args.active, args.appid) else {
        output::print_output(USAGE_HINT, global.quiet);
        return Ok(());
    };

    let platform = super::connect(global)?;
    let catalog = platform.apps_info().await?;
    let view = catalog.select(selection, || platform.current_id())?;

    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &view,
        |v| render_view(v, selection, color),
        render_plain,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
