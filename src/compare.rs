use std::collections::BTreeSet;

use crate::results::{Measurement, ResultSet};

/// One line of the comparison. `None` marks a side the benchmark is missing from.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub name: String,
    pub base: Option<Measurement>,
    pub pr: Option<Measurement>,
    pub change: Option<f64>,
}

impl ComparisonRow {
    pub fn new(name: &str, base: Option<Measurement>, pr: Option<Measurement>) -> Self {
        let change = match (&base, &pr) {
            (Some(base), Some(pr)) => Some(percent_change(base, pr)),
            _ => None,
        };
        Self {
            name: name.to_string(),
            base,
            pr,
            change,
        }
    }

    pub fn is_base_only(&self) -> bool {
        self.base.is_some() && self.pr.is_none()
    }

    pub fn is_pr_only(&self) -> bool {
        self.base.is_none() && self.pr.is_some()
    }
}

/// Relative change of the PR mean against the base mean, in percent.
/// A zero base mean yields positive infinity.
pub fn percent_change(base: &Measurement, pr: &Measurement) -> f64 {
    if base.mean == 0.0 {
        return f64::INFINITY;
    }
    ((pr.mean - base.mean) / base.mean) * 100.0
}

/// Joins both result sets over the union of their keys, sorted by key.
pub fn compare(base: &ResultSet, pr: &ResultSet) -> Vec<ComparisonRow> {
    let names: BTreeSet<&str> = base.keys().chain(pr.keys()).collect();
    let rows: Vec<ComparisonRow> = names
        .into_iter()
        .map(|name| ComparisonRow::new(name, base.get(name).copied(), pr.get(name).copied()))
        .collect();
    log::debug!(
        "compared {} benchmarks ({} base, {} pr)",
        rows.len(),
        base.len(),
        pr.len()
    );
    rows
}
