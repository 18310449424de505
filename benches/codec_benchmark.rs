// benches/codec_benchmark.rs
use criterion::{criterion_group, criterion_main, Criterion, BenchmarkId, Throughput};
use flvtag_rs::*;

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [0usize, 1024, 65536, 1 << 20].iter() {
        let tag = Tag::new(TagType::Video, 1234, vec![0x17; *size]);
        group.throughput(Throughput::Bytes(tag.size() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tag, |b, tag| {
            let mut wire = Vec::with_capacity(tag.size());
            b.iter(|| {
                wire.clear();
                encode(tag, &mut wire).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [0usize, 1024, 65536, 1 << 20].iter() {
        let wire = Tag::new(TagType::Audio, 1234, vec![0xAF; *size]).to_bytes().unwrap();
        group.throughput(Throughput::Bytes(wire.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &wire, |b, wire| {
            b.iter(|| decode(&mut &wire[..]).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_decode);
criterion_main!(benches);
