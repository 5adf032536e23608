//! Benchmarks for the rulebook conversion pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use rulebook_import::dom::{MarkupTree, SerializeFilter, inner_html, parse_html};
use rulebook_import::record::SeededStamps;
use rulebook_import::{Converter, JsonExporter};

const TALENTS_HTML: &str = include_str!("../tests/fixtures/talentos.html");
const SPELLS_HTML: &str = include_str!("../tests/fixtures/magias.html");

/// A chapter-sized page made by repeating the fixture.
fn large_page(html: &str, copies: usize) -> String {
    html.repeat(copies)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("html5ever_talents", |b| {
        b.iter(|| parse_html(black_box(TALENTS_HTML)))
    });

    let dom = parse_html(SPELLS_HTML);
    group.bench_function("inner_html_spells", |b| {
        let filter = SerializeFilter::new().drop_attributes(&["style"]);
        b.iter(|| inner_html(&dom, black_box(dom.root()), &filter))
    });

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("talents", |b| {
        b.iter(|| {
            Converter::new()
                .with_stamps(SeededStamps::new(1, 0))
                .talents(black_box(TALENTS_HTML))
        })
    });

    group.bench_function("spells", |b| {
        b.iter(|| {
            Converter::new()
                .with_stamps(SeededStamps::new(1, 0))
                .spells(black_box(SPELLS_HTML))
        })
    });

    let chapter = large_page(TALENTS_HTML, 50);
    group.bench_function("talents_chapter", |b| {
        b.iter(|| {
            Converter::new()
                .with_stamps(SeededStamps::new(1, 0))
                .talents(black_box(&chapter))
        })
    });

    let plain = "CAMINHO DA FERA\nVocê tem um animal.\n\n\n".repeat(200);
    group.bench_function("talents_plain_text", |b| {
        b.iter(|| {
            Converter::new()
                .with_stamps(SeededStamps::new(1, 0))
                .talents(black_box(&plain))
        })
    });

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let chapter = large_page(SPELLS_HTML, 50);
    let records = Converter::new()
        .with_stamps(SeededStamps::new(1, 0))
        .spells(&chapter);

    let mut group = c.benchmark_group("export");
    group.bench_function("json_pretty", |b| {
        let exporter = JsonExporter::new();
        b.iter(|| exporter.to_string(black_box(&records)))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_convert, bench_export);
criterion_main!(benches);
