//! Performance benchmarks for the turn stream parser
//!
//! Measures frame parsing for whole streams and for streams cut into small
//! chunks. Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use triluna::sse::{ActionCallbacks, ActionConsumer, LineParser};

/// A turn stream with `chunks` narration frames between the stage events.
fn generate_turn_stream(chunks: usize) -> String {
    let mut stream = String::new();
    stream.push_str("event: planner\ndata: {\"intent\":\"attack\",\"target\":\"Lobo Sombrio\"}\n\n");
    stream.push_str("event: executor\ndata: {\"success\":true,\"summary\":\"golpe certeiro\"}\n\n");
    for i in 0..chunks {
        stream.push_str(&format!(
            "event: narrator_chunk\ndata: {{\"text\":\"A lâmina corta a névoa, fragmento {}. \"}}\n\n",
            i
        ));
    }
    stream.push_str("event: validator\ndata: {\"status\":\"ok\",\"attempts\":1}\n\n");
    stream.push_str(
        "event: done\ndata: {\"turn_number\":12,\"success\":true,\"world_tick_occurred\":false}\n\n",
    );
    stream
}

/// Benchmark parsing a stream delivered as one chunk
fn bench_parse_single_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("sse_parse_single_chunk");

    for size in [10, 100, 1000].iter() {
        let stream = generate_turn_stream(*size);
        group.throughput(Throughput::Bytes(stream.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_chunks", size)),
            &stream,
            |b, stream| {
                b.iter(|| {
                    let mut parser = LineParser::new();
                    let frames = parser.feed(black_box(stream.as_bytes())).unwrap_or_default();
                    black_box(frames)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark parsing a stream cut into small network reads
fn bench_parse_split_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sse_parse_split_chunks");
    let stream = generate_turn_stream(100);
    group.throughput(Throughput::Bytes(stream.len() as u64));

    for read_size in [7, 64, 512].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_byte_reads", read_size)),
            read_size,
            |b, &read_size| {
                b.iter(|| {
                    let mut parser = LineParser::new();
                    let mut count = 0;
                    for piece in stream.as_bytes().chunks(read_size) {
                        count += parser.feed(black_box(piece)).map(|f| f.len()).unwrap_or(0);
                    }
                    black_box(count)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full path: parse, validate and dispatch to callbacks
fn bench_consume_dispatch(c: &mut Criterion) {
    let stream = generate_turn_stream(100);

    c.bench_function("sse_consume_dispatch_100_chunks", |b| {
        b.iter(|| {
            let mut narrated = 0usize;
            let mut callbacks = ActionCallbacks::new().on_narrator_chunk(move |chunk| {
                narrated += chunk.text.len();
                black_box(narrated);
            });
            let mut consumer = ActionConsumer::new(&mut callbacks);
            for piece in stream.as_bytes().chunks(256) {
                let _ = consumer.process_chunk(piece);
            }
            black_box(consumer.finish())
        });
    });
}

criterion_group!(
    benches,
    bench_parse_single_chunk,
    bench_parse_split_chunks,
    bench_consume_dispatch
);
criterion_main!(benches);
