//! Markdown and JSON rendering of comparison rows.

use serde::Serialize;

use crate::{BenchDiffError, compare::ComparisonRow, results::Measurement};

pub const NOT_AVAILABLE: &str = "N/A";
pub const REPORT_TITLE: &str = "## Benchmark results comparison:";
pub const SUMMARY_LINE: &str = "  <summary>Click to expand</summary>";
const TABLE_HEADER: &str = "| Test | Base | PR | % |\n|------|------|----|---|\n";

pub fn format_measurement(measurement: Option<&Measurement>) -> String {
    match measurement {
        Some(m) => format!("{}±{}ns", fixed(m.mean, false), fixed(m.std_dev, false)),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(pct) => format!("{}%", fixed(pct, true)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Two decimals; NaN prints as lowercase `nan`, ignoring its sign bit.
fn fixed(value: f64, signed: bool) -> String {
    match (value.is_nan(), signed) {
        (true, true) => "+nan".to_string(),
        (true, false) => "nan".to_string(),
        (false, true) => format!("{value:+.2}"),
        (false, false) => format!("{value:.2}"),
    }
}

pub fn render_row(row: &ComparisonRow) -> String {
    format!(
        "| {} | {} | {} | {} |\n",
        row.name,
        format_measurement(row.base.as_ref()),
        format_measurement(row.pr.as_ref()),
        format_change(row.change)
    )
}

pub fn render_table(rows: &[ComparisonRow]) -> String {
    let mut table = String::from(TABLE_HEADER);
    for row in rows {
        table.push_str(&render_row(row));
    }
    table
}

/// Full report: the table inside a collapsed `<details>` block.
pub fn render_markdown(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push_str("\n\n<details>\n");
    out.push_str(SUMMARY_LINE);
    out.push_str("\n\n");
    out.push_str(&render_table(rows));
    out.push_str("\n</details>\n");
    out
}

#[derive(Serialize)]
struct JsonRow<'a> {
    test: &'a str,
    base: Option<&'a Measurement>,
    pr: Option<&'a Measurement>,
    change: String,
    change_pct: Option<f64>,
    base_mean_zero: bool,
}

impl<'a> From<&'a ComparisonRow> for JsonRow<'a> {
    fn from(row: &'a ComparisonRow) -> Self {
        Self {
            test: &row.name,
            base: row.base.as_ref(),
            pr: row.pr.as_ref(),
            change: format_change(row.change),
            change_pct: row.change.filter(|pct| pct.is_finite()),
            base_mean_zero: matches!(
                (&row.base, &row.pr),
                (Some(base), Some(_)) if base.mean == 0.0
            ),
        }
    }
}

pub fn render_json(rows: &[ComparisonRow]) -> Result<String, BenchDiffError> {
    let rows: Vec<JsonRow<'_>> = rows.iter().map(JsonRow::from).collect();
    let mut out = serde_json::to_string_pretty(&rows)
        .map_err(|e| BenchDiffError::invalid_input(format!("json serialization failed: {e}")))?;
    out.push('\n');
    Ok(out)
}
