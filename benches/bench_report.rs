use std::{fmt::Write, hint::black_box, time::Duration};

use benchdiff::{ResultSet, compare, report::render_markdown};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

struct BenchCase {
    id: String,
    base: String,
    pr: String,
}

fn bench_scales() -> &'static [usize] {
    &[10, 100, 1_000]
}

/// Builds a report with `test_cases` cases of eight benchmarks each. `skew`
/// shifts every mean and drops the last benchmark of every third case.
fn generate_report(test_cases: usize, skew: f64) -> String {
    let mut xml = String::from("<Catch2TestRun name=\"bench\">\n");
    for case in 0..test_cases {
        writeln!(xml, "  <TestCase name=\"case_{case}\">").expect("write to String");
        let benchmarks = if skew > 0.0 && case % 3 == 0 { 7 } else { 8 };
        for bench in 0..benchmarks {
            let mean = (case * 8 + bench) as f64 + 1.0 + skew;
            writeln!(
                xml,
                "    <BenchmarkResults name=\"bench_{bench}\"><mean value=\"{mean}\"/><standardDeviation value=\"{:.3}\"/></BenchmarkResults>",
                mean * 0.05
            )
            .expect("write to String");
        }
        xml.push_str("  </TestCase>\n");
    }
    xml.push_str("</Catch2TestRun>\n");
    xml
}

fn bench_cases() -> Vec<BenchCase> {
    bench_scales()
        .iter()
        .map(|&cases| BenchCase {
            id: format!("cases_{cases}"),
            base: generate_report(cases, 0.0),
            pr: generate_report(cases, 0.5),
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_results");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in bench_cases() {
        group.bench_function(BenchmarkId::from_parameter(&case.id), |b| {
            b.iter(|| ResultSet::parse(black_box(&case.base)).expect("parse"));
        });
    }
    group.finish();
}

fn bench_compare_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_render");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for case in bench_cases() {
        let base = ResultSet::parse(&case.base).expect("base");
        let pr = ResultSet::parse(&case.pr).expect("pr");
        group.bench_function(BenchmarkId::from_parameter(&case.id), |b| {
            b.iter(|| render_markdown(&compare(black_box(&base), black_box(&pr))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_compare_render);
criterion_main!(benches);
