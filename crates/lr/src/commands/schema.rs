//! `get schema` handler.

use std::fmt::Write as _;

use tabled::Tabled;

use lr_core::{CustomFieldRow, FieldRow, SchemaReport};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Placeholder shown in the custom-field table when the site has none.
const NO_CUSTOM_FIELDS: &str = "No Custom Fields";

/// Printed under the placeholder row.
const ADD_CUSTOM_FIELD_HINT: &str = "Use command `lr add custom-field` to add the Custom Field";

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct FieldTableRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DISPLAY")]
    display: String,
    #[tabled(rename = "TYPE")]
    field_type: String,
    #[tabled(rename = "ENABLED")]
    enabled: bool,
}

impl From<&FieldRow> for FieldTableRow {
    fn from(r: &FieldRow) -> Self {
        Self {
            name: r.name.clone(),
            display: r.display.clone(),
            field_type: r.field_type.clone(),
            enabled: r.enabled,
        }
    }
}

#[derive(Tabled)]
struct CustomTableRow {
    #[tabled(rename = "CUSTOM FIELDS")]
    display: String,
    #[tabled(rename = "TYPE")]
    field_type: String,
    #[tabled(rename = "ENABLED")]
    enabled: String,
}

impl From<&CustomFieldRow> for CustomTableRow {
    fn from(r: &CustomFieldRow) -> Self {
        Self {
            display: r.display.clone(),
            field_type: r.field_type.clone(),
            enabled: r.enabled.to_string(),
        }
    }
}

impl CustomTableRow {
    fn placeholder() -> Self {
        Self {
            display: NO_CUSTOM_FIELDS.into(),
            field_type: String::new(),
            enabled: String::new(),
        }
    }
}

// ── Rendering ───────────────────────────────────────────────────────

/// Both tables, the custom one replaced by the fetch error when it failed.
fn render_tables(report: &SchemaReport, color: bool) -> String {
    let rows: Vec<FieldTableRow> = report.fields.iter().map(FieldTableRow::from).collect();
    let mut out = output::render_table(&rows);
    out.push('\n');

    if let Some(ref err) = report.custom_fields_error {
        out.push_str(err);
    } else if report.has_no_custom_fields() {
        out.push_str(&output::render_table(&[CustomTableRow::placeholder()]));
        let _ = write!(out, "\n{}", output::note(ADD_CUSTOM_FIELD_HINT, color));
    } else {
        let custom: Vec<CustomTableRow> = report
            .custom_fields
            .iter()
            .map(CustomTableRow::from)
            .collect();
        out.push_str(&output::render_table(&custom));
    }
    out
}

/// Field keys, one per line, enabled fields first.
fn render_plain(report: &SchemaReport) -> String {
    report
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let platform = super::connect(global)?;
    let report = platform.schema_report().await?;

    let color = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &report,
        |r| render_tables(r, color),
        render_plain,
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(custom: Vec<CustomFieldRow>, error: Option<&str>) -> SchemaReport {
        SchemaReport {
            fields: vec![
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
            ],
            custom_fields: custom,
            custom_fields_error: error.map(Into::into),
        }
    }

    #[test]
    fn tables_list_fields_in_report_order() {
        let out = render_tables(&report(Vec::new(), None), false);
        let email = out.find("emailid").unwrap_or(usize::MAX);
        let last = out.find("lastname").unwrap_or(0);
        assert!(email < last, "enabled field should come first:\n{out}");
        assert!(out.contains("NAME"));
        assert!(out.contains("ENABLED"));
    }

    #[test]
    fn empty_custom_fields_show_placeholder_and_hint() {
        let out = render_tables(&report(Vec::new(), None), false);
        assert!(out.contains(NO_CUSTOM_FIELDS));
        assert!(out.contains(ADD_CUSTOM_FIELD_HINT));
        assert!(out.contains("CUSTOM FIELDS"));
    }

    #[test]
    fn custom_fields_render_as_table() {
        let custom = vec![CustomFieldRow {
            display: "MyCF".into(),
            field_type: "string".into(),
            enabled: true,
        }];
        let out = render_tables(&report(custom, None), false);
        assert!(out.contains("MyCF"));
        assert!(!out.contains(NO_CUSTOM_FIELDS));
    }

    #[test]
    fn custom_field_failure_replaces_custom_table() {
        let out = render_tables(&report(Vec::new(), Some("API error: nope")), false);
        assert!(out.contains("API error: nope"));
        assert!(out.contains("emailid"));
        assert!(!out.contains("CUSTOM FIELDS"));
        assert!(!out.contains(NO_CUSTOM_FIELDS));
    }

    #[test]
    fn plain_lists_keys() {
        assert_eq!(render_plain(&report(Vec::new(), None)), "emailid\nlastname");
    }
}
