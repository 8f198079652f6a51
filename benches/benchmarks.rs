use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seedloc::index::SequenceIndex;
use seedloc::locate::{locate, locate_batch};

fn make_reference(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_build_index(c: &mut Criterion) {
    let reference = make_reference(100_000);

    c.bench_function("build_index_100k_k16", |b| {
        b.iter(|| {
            black_box(SequenceIndex::build(black_box(&reference), 16).unwrap());
        })
    });
}

fn bench_locate_exact(c: &mut Criterion) {
    let reference = make_reference(100_000);
    let index = SequenceIndex::build(&reference, 16).unwrap();
    let read = reference[500..600].to_vec();

    c.bench_function("locate_exact_100bp", |b| {
        b.iter(|| {
            black_box(locate(black_box(&index), black_box(&read)).unwrap());
        })
    });
}

fn bench_locate_one_error(c: &mut Criterion) {
    let reference = make_reference(100_000);
    let index = SequenceIndex::build(&reference, 16).unwrap();
    let mut read = reference[500..600].to_vec();
    read[3] = b'N'; // 破坏前半，走后半种子

    c.bench_function("locate_second_seed_100bp", |b| {
        b.iter(|| {
            black_box(locate(black_box(&index), black_box(&read)).unwrap());
        })
    });
}

fn bench_locate_batch(c: &mut Criterion) {
    let reference = make_reference(100_000);
    let index = SequenceIndex::build(&reference, 16).unwrap();
    let reads: Vec<Vec<u8>> = (0..10_000).map(|i| reference[i * 9..i * 9 + 100].to_vec()).collect();

    c.bench_function("locate_batch_10k_reads_4_threads", |b| {
        b.iter(|| {
            black_box(locate_batch(black_box(&index), black_box(&reads), 4).unwrap());
        })
    });
}

criterion_group!(benches, bench_build_index, bench_locate_exact, bench_locate_one_error, bench_locate_batch);
criterion_main!(benches);
