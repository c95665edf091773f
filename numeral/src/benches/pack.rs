use commonware_numeral::{as_hexadecimal, encode::pack, Radix};
use criterion::{criterion_group, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn bench_pack(c: &mut Criterion) {
    for value in [7u64, 65_535, u32::MAX as u64, u64::MAX] {
        for radix in [Radix::Octal, Radix::Decimal, Radix::Hexadecimal] {
            c.bench_function(
                &format!("{}/fn=pack radix={radix:?} value={value}", module_path!()),
                |b| {
                    b.iter(|| pack(black_box(radix), black_box(value)));
                },
            );
        }
    }
}

fn bench_as_hexadecimal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for size in [32, 1 << 10, 1 << 16] {
        let mut raw = vec![0u8; size];
        rng.fill(&mut raw[..]);
        c.bench_function(
            &format!("{}/fn=as_hexadecimal size={size}", module_path!()),
            |b| {
                b.iter(|| as_hexadecimal(black_box(&raw)));
            },
        );
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_pack, bench_as_hexadecimal,
}
