//! Compare two Catch2 XML benchmark reports and render the difference as a
//! markdown table suitable for a CI comment.
//!
//! ```rust,no_run
//! use benchdiff::{ResultSet, compare, report::render_markdown};
//!
//! let base = ResultSet::from_path("base.xml")?;
//! let pr = ResultSet::from_path("pr.xml")?;
//! print!("{}", render_markdown(&compare(&base, &pr)));
//! # Ok::<(), benchdiff::BenchDiffError>(())
//! ```

pub mod cli;
pub mod compare;
pub mod errors;
pub mod report;
pub mod results;

pub use crate::compare::{ComparisonRow, compare, percent_change};
pub use crate::errors::BenchDiffError;
pub use crate::results::{Measurement, ResultSet};
