//! Benchmarks for mdcv parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test parsing performance with synthetic resume
//! documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic resume with the given number of sections.
fn create_test_resume(section_count: usize) -> String {
    let mut content = String::new();

    content.push_str("# **Benchmark Candidate**\n\n");
    content.push_str("**Principal Engineer**\n\n");
    content.push_str("\u{1F4E7} [bench@example.com](mailto:bench@example.com) | Remote\n\n");

    for i in 0..section_count {
        content.push_str("---\n\n");
        content.push_str(&format!("## **Section {}**\n\n", i + 1));
        content.push_str(&format!("### **Role {}**\n\n", i + 1));
        content.push_str("*2020 - Present | Remote*\n\n");
        content.push_str("* **Shipped** a thing \u{1F680}\n");
        content.push_str("    * with a nested detail\n");
        content.push_str("    * and another nested detail\n");
        content.push_str("\nBody text with **bold** and [a link](https://example.com).\n\n");
    }

    content
}

/// Benchmark shape detection.
fn bench_shape_detection(c: &mut Criterion) {
    let resume = create_test_resume(5);
    let prose = "Just a paragraph of text.\nAnd another one.\n";

    c.bench_function("detect_valid_resume", |b| {
        b.iter(|| mdcv::is_resume_markdown(black_box(&resume)));
    });

    c.bench_function("detect_prose", |b| {
        b.iter(|| mdcv::is_resume_markdown(black_box(prose)));
    });
}

/// Benchmark parsing at various document sizes.
fn bench_resume_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("resume_parsing");

    for section_count in [1, 10, 50].iter() {
        let source = create_test_resume(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| {
                let _ = mdcv::parse_str(black_box(&source));
            });
        });
    }

    group.finish();
}

/// Benchmark sanitizer throughput on a markup-heavy line.
fn bench_sanitize(c: &mut Criterion) {
    let sanitizer = mdcv::Sanitizer::default();
    let line = "\u{1F4E7} **Built** [pipelines](https://example.com) & <tools> \u{1F680}";

    c.bench_function("sanitize_line", |b| {
        b.iter(|| sanitizer.sanitize(black_box(line)));
    });
}

criterion_group!(
    benches,
    bench_shape_detection,
    bench_resume_parsing,
    bench_sanitize,
);
criterion_main!(benches);
