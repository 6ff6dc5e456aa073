//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// A section heading such as `Active site: `, bold cyan when colored.
pub fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_owned()
    }
}

/// A secondary note printed under a table, dimmed when colored.
pub fn note(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_owned()
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted string,
/// since detail views don't map onto a single `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    Ok(match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json_pretty(data)?,
        OutputFormat::JsonCompact => render_json_compact(data)?,
        OutputFormat::Yaml => render_yaml(data)?,
        OutputFormat::Plain => id_fn(data),
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

/// Rounded table built from `Tabled` rows.
pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Pretty-printed JSON.
pub fn render_json_pretty<T: serde::Serialize + ?Sized>(
    data: &T,
) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Compact single-line JSON.
pub fn render_json_compact<T: serde::Serialize + ?Sized>(
    data: &T,
) -> Result<String, CliError> {
    Ok(serde_json::to_string(data)?)
}

/// YAML output.
pub fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde::Serialize;

    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: i64,
        #[tabled(rename = "NAME")]
        name: String,
    }

    fn row() -> Row {
        Row {
            id: 7,
            name: "demo".into(),
        }
    }

    #[test]
    fn table_has_headers_and_values() {
        let out = render_table(&[row()]);
        assert!(out.contains("ID"));
        assert!(out.contains("NAME"));
        assert!(out.contains("demo"));
    }

    #[test]
    fn single_dispatches_on_format() {
        let r = row();
        let detail = |r: &Row| format!("detail {}", r.name);
        let id = |r: &Row| r.id.to_string();

        let table = render_single(&OutputFormat::Table, &r, detail, id).unwrap();
        assert_eq!(table, "detail demo");

        let plain = render_single(&OutputFormat::Plain, &r, detail, id).unwrap();
        assert_eq!(plain, "7");

        let compact = render_single(&OutputFormat::JsonCompact, &r, detail, id).unwrap();
        assert_eq!(compact, r#"{"id":7,"name":"demo"}"#);

        let yaml = render_single(&OutputFormat::Yaml, &r, detail, id).unwrap();
        assert!(yaml.contains("name: demo"));
    }

    #[test]
    fn uncolored_heading_is_verbatim() {
        assert_eq!(heading("Active site: ", false), "Active site: ");
        assert_ne!(heading("Active site: ", true), "Active site: ");
    }
}
