use criterion::{criterion_group, criterion_main, Criterion};
use store::{backend::memory::MemoryStore, StoreWrite};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("std::HashMap<Vec<u8>, Vec<u8>> insert", |b| {
        let mut map = std::collections::HashMap::new();
        let mut i = 0;
        b.iter(|| {
            map.insert(
                usize::to_be_bytes(i).to_vec(),
                usize::to_be_bytes(i).to_vec(),
            );
            i += 1;
        })
    });
    c.bench_function("MemoryStore set", |b| {
        let mut store = MemoryStore::default();
        let mut i = 0;
        b.iter(|| {
            store
                .set(usize::to_be_bytes(i), usize::to_be_bytes(i))
                .unwrap();
            i += 1;
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
