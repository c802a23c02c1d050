use std::{fs, path::Path};

use ahash::AHashMap;
use roxmltree::{Document, Node};
use serde::Serialize;

use crate::BenchDiffError;

const TEST_CASE_TAG: &str = "TestCase";
const BENCHMARK_TAG: &str = "BenchmarkResults";
const MEAN_TAG: &str = "mean";
const STD_DEV_TAG: &str = "standardDeviation";
const IN_MEMORY_ORIGIN: &str = "<input>";

/// Mean and standard deviation of one benchmark, in nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Measurement {
    pub mean: f64,
    pub std_dev: f64,
}

impl Measurement {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

/// Benchmark results of one report, keyed by `"<test case>/<benchmark>"`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    entries: AHashMap<String, Measurement>,
}

impl ResultSet {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BenchDiffError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| BenchDiffError::io(path, e))?;
        let set = parse_document(&path.display().to_string(), &text)?;
        log::debug!(
            "parsed {} benchmark results from {}",
            set.len(),
            path.display()
        );
        Ok(set)
    }

    pub fn parse(xml: &str) -> Result<Self, BenchDiffError> {
        parse_document(IN_MEMORY_ORIGIN, xml)
    }

    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Measurement)> {
        self.entries.iter().map(|(name, m)| (name.as_str(), m))
    }
}

impl FromIterator<(String, Measurement)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (String, Measurement)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn parse_document(origin: &str, xml: &str) -> Result<ResultSet, BenchDiffError> {
    let doc = Document::parse(xml).map_err(|e| BenchDiffError::xml(origin, e))?;
    let mut entries = AHashMap::new();
    for test_case in child_elements(doc.root_element(), TEST_CASE_TAG) {
        let test_name = required_attribute(test_case, "name")?;
        for benchmark in child_elements(test_case, BENCHMARK_TAG) {
            let bench_name = required_attribute(benchmark, "name")?;
            let key = format!("{test_name}/{bench_name}");
            let measurement = Measurement {
                mean: child_value(benchmark, MEAN_TAG, &key)?,
                std_dev: child_value(benchmark, STD_DEV_TAG, &key)?,
            };
            if entries.insert(key.clone(), measurement).is_some() {
                log::warn!("duplicate benchmark {key} in {origin}, keeping the later result");
            }
        }
    }
    Ok(ResultSet { entries })
}

fn child_elements<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.has_tag_name(tag))
}

fn required_attribute<'a>(node: Node<'a, '_>, attr: &str) -> Result<&'a str, BenchDiffError> {
    node.attribute(attr).ok_or_else(|| {
        BenchDiffError::missing_field(format!(
            "<{}> without {attr} attribute",
            node.tag_name().name()
        ))
    })
}

fn child_value(benchmark: Node<'_, '_>, tag: &str, key: &str) -> Result<f64, BenchDiffError> {
    let node = benchmark
        .children()
        .find(|child| child.is_element() && child.has_tag_name(tag))
        .ok_or_else(|| BenchDiffError::missing_field(format!("{key}: no <{tag}> element")))?;
    let raw = node
        .attribute("value")
        .ok_or_else(|| BenchDiffError::missing_field(format!("{key}: <{tag}> without value")))?;
    parse_number(raw).ok_or_else(|| BenchDiffError::invalid_number(format!("{key}: {tag}={raw:?}")))
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
