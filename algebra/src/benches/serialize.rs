use bls12381_algebra::{pairing, Element, Point, G1, G2, GT};
use criterion::{criterion_group, BatchSize, Criterion};
use rand::thread_rng;
use std::hint::black_box;

fn bench_codec<T: Element>(c: &mut Criterion, name: &str, element: T) {
    let bytes = element.serialize().unwrap();
    c.bench_function(
        &format!("{}/group={} op=deserialize", module_path!(), name),
        |b| b.iter(|| black_box(T::deserialize(&bytes).unwrap())),
    );
    c.bench_function(
        &format!("{}/group={} op=serialize", module_path!(), name),
        |b| {
            b.iter_batched(
                || element,
                |element| black_box(element.serialize().unwrap()),
                BatchSize::SmallInput,
            )
        },
    );
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut rng = thread_rng();
    let p = G1::random(&mut rng);
    let q = G2::random(&mut rng);
    bench_codec::<G1>(c, "g1", p);
    bench_codec::<G2>(c, "g2", q);
    bench_codec::<GT>(c, "gt", pairing(&p, &q));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_serialize
}
