use std::io::{BufReader, Cursor};

use bbconvert::{ParseEvent, TagConverter, XmlEventSource};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn generate_document(paragraphs: usize) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>
<document>"#);

    for i in 0..paragraphs {
        xml.push_str(&format!(
            r#"
  <p>Paragraph {} with <b>bold</b>, <i>italic</i> and <color color="red">colored</color> text.<br/>
    See <url url="https://example.com/{}">this link</url> or <quote>a quote</quote>.</p>"#,
            i, i
        ));
    }

    xml.push_str("\n</document>\n");
    xml
}

fn bench_convert_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_str");
    let converter = TagConverter::default();

    for paragraphs in [10, 100, 1000] {
        let xml = generate_document(paragraphs);
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &xml, |b, xml| {
            b.iter(|| converter.convert_str(black_box(xml)).unwrap())
        });
    }

    group.finish();
}

fn bench_event_source(c: &mut Criterion) {
    let xml = generate_document(1000);
    let mut group = c.benchmark_group("event_source");
    group.throughput(Throughput::Bytes(xml.len() as u64));

    group.bench_function("read_events", |b| {
        b.iter(|| {
            let reader = BufReader::new(Cursor::new(xml.as_bytes()));
            XmlEventSource::new(reader).events().count()
        })
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let xml = generate_document(1000);
    let events: Vec<ParseEvent> = XmlEventSource::from_xml(&xml)
        .events()
        .collect::<Result<_, _>>()
        .unwrap();
    let converter = TagConverter::default();

    c.bench_function("dispatch_only", |b| {
        b.iter(|| converter.convert(black_box(events.iter().cloned())))
    });
}

criterion_group!(benches, bench_convert_str, bench_event_source, bench_dispatch);
criterion_main!(benches);
