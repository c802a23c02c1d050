use std::{ffi::OsString, path::PathBuf, str::FromStr};

use crate::{
    BenchDiffError,
    compare::compare,
    report::{render_json, render_markdown},
    results::ResultSet,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unsupported format {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub base: PathBuf,
    pub pr: PathBuf,
    pub format: OutputFormat,
}

/// Outcome of argument parsing. A wrong positional count is not an error,
/// it only asks for the usage line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedArgs {
    Run(CommandLineConfig),
    Usage,
}

impl CommandLineConfig {
    /// Parses `argv`, program name included. Flag errors only surface once
    /// exactly two positional paths were given; any other count asks for usage.
    pub fn from_args<I, T>(args: I) -> Result<ParsedArgs, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut format = OutputFormat::default();
        let mut flag_error: Option<String> = None;
        let mut positional: Vec<OsString> = Vec::new();
        let mut iter = args.into_iter().map(Into::<OsString>::into).skip(1);
        while let Some(arg) = iter.next() {
            match arg.to_str() {
                Some("--format") => match iter.next() {
                    Some(value) => match value.to_str().map(str::parse::<OutputFormat>) {
                        Some(Ok(parsed)) => format = parsed,
                        Some(Err(err)) => {
                            flag_error.get_or_insert(err);
                        }
                        None => {
                            flag_error.get_or_insert(format!("unsupported format {value:?}"));
                        }
                    },
                    None => {
                        flag_error.get_or_insert("--format requires a value".to_string());
                    }
                },
                Some(other) if other.starts_with("--") => {
                    flag_error.get_or_insert(format!("unknown flag {other}"));
                }
                _ => positional.push(arg),
            }
        }
        let [base, pr]: [OsString; 2] = match positional.try_into() {
            Ok(paths) => paths,
            Err(_) => return Ok(ParsedArgs::Usage),
        };
        if let Some(err) = flag_error {
            return Err(err);
        }
        Ok(ParsedArgs::Run(Self {
            base: PathBuf::from(base),
            pr: PathBuf::from(pr),
            format,
        }))
    }

    pub fn usage() -> &'static str {
        "Usage: benchdiff <base_xml_path> <pr_xml_path>"
    }
}

/// Loads both reports and renders the comparison in the configured format.
pub fn execute(config: &CommandLineConfig) -> Result<String, BenchDiffError> {
    let base = ResultSet::from_path(&config.base)?;
    let pr = ResultSet::from_path(&config.pr)?;
    let rows = compare(&base, &pr);
    match config.format {
        OutputFormat::Markdown => Ok(render_markdown(&rows)),
        OutputFormat::Json => render_json(&rows),
    }
}
