use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use normalizer::normalize;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let chunk = "Weeell *sighs loudly* I GuEsS thats fiiine, RiGHt? ";
    for size in [64, 512, 4096, 32768].iter() {
        let text = chunk.repeat(size / chunk.len() + 1);
        let text = &text[..*size];
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("bytes_{size}"), |b| {
            b.iter(|| normalize(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
