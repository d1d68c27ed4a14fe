use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gcrypto_algorithms::{HashFactory, MacFactory, ModeFactory, PrngFactory};
use gcrypto_api::{
    CipherConfig, CipherMode, Direction, IcmConfig, MacConfig, MacFunction, MessageDigest,
    ModeConfig, PrngConfig, RandomGenerator,
};

const SIZES: [usize; 4] = [16, 256, 1024, 16384];

fn bench_aes_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes-modes");

    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for mode_name in ["ecb", "ctr", "icm", "ofb"] {
            for key_len in [16usize, 32] {
                group.bench_with_input(
                    BenchmarkId::new(format!("{}-aes-{}", mode_name, key_len * 8), size),
                    &size,
                    |b, _| {
                        let mut mode = ModeFactory::get_instance(mode_name, "aes", 16).unwrap();
                        mode.init(
                            &ModeConfig::new(CipherConfig::new().with_key(&vec![0u8; key_len]))
                                .with_direction(Direction::Encryption)
                                .with_iv(&[0u8; 16]),
                        )
                        .unwrap();
                        let mut out = vec![0u8; size];
                        b.iter(|| {
                            for off in (0..size).step_by(16) {
                                mode.update(&data, off, &mut out, off).unwrap();
                            }
                        });
                    },
                );
            }
        }
    }

    group.finish();
}

fn bench_digests_and_macs(c: &mut Criterion) {
    let mut group = c.benchmark_group("digests");

    for size in SIZES {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        for name in HashFactory::names() {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                let mut hash = HashFactory::get_instance(name).unwrap();
                b.iter(|| {
                    hash.update(&data);
                    hash.digest()
                });
            });
        }

        group.bench_with_input(BenchmarkId::new("hmac-sha-256", size), &size, |b, _| {
            let mut mac = MacFactory::get_instance("hmac-sha-256").unwrap();
            mac.init(MacConfig::new().with_key(&[0x0b; 32])).unwrap();
            b.iter(|| {
                mac.update(&data).unwrap();
                mac.digest().unwrap()
            });
        });
    }

    group.finish();
}

fn bench_icm_keystream(c: &mut Criterion) {
    let mut group = c.benchmark_group("icm-prng");
    let size = 4096;
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("aes-128", |b| {
        b.iter(|| {
            let mut prng = PrngFactory::get_instance("icm").unwrap();
            prng.init(&PrngConfig::Icm(IcmConfig::new().with_key(&[0u8; 16])))
                .unwrap();
            let mut out = vec![0u8; size];
            prng.fill(&mut out).unwrap();
            out
        });
    });
    group.finish();
}

criterion_group!(benches, bench_aes_modes, bench_digests_and_macs, bench_icm_keystream);
criterion_main!(benches);
