use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_INPUT_THRESHOLD: usize = 65_536;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Auto);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the small or large preset from the input length.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len < LARGE_INPUT_THRESHOLD {
        apply_small_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Workload {
    RandomUniform,
    NearlySorted1pctSwaps,
    FewDistinct,
}

pub const ALL_WORKLOADS: [Workload; 3] = [
    Workload::RandomUniform,
    Workload::NearlySorted1pctSwaps,
    Workload::FewDistinct,
];

impl Workload {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::FewDistinct => "few_distinct",
        }
    }
}

/// Keys of `bits` significant bits laid out per `workload`.
pub fn generate_keys<R: Rng + ?Sized>(
    rng: &mut R,
    workload: Workload,
    len: usize,
    bits: u32,
) -> Vec<u64> {
    let mask = if bits >= 64 {
        u64::MAX
    } else {
        (1_u64 << bits) - 1
    };
    match workload {
        Workload::RandomUniform => (0..len).map(|_| rng.random::<u64>() & mask).collect(),
        Workload::NearlySorted1pctSwaps => {
            let mut data: Vec<u64> = (0..len as u64).map(|i| i & mask).collect();
            if len > 0 {
                for _ in 0..(len / 100).max(1) {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    data.swap(a, b);
                }
            }
            data
        }
        Workload::FewDistinct => (0..len)
            .map(|_| (rng.random_range(0..16_u64) * 17) & mask)
            .collect(),
    }
}

/// Signed values with the extremes of the type mixed in, mostly small
/// magnitudes of both signs.
pub fn generate_signed<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len)
        .map(|_| match rng.random_range(0..100_u32) {
            0 => i64::MIN,
            1 => i64::MAX,
            2..=39 => -rng.random_range(0..1_000_000_i64),
            40..=79 => rng.random_range(0..1_000_000_i64),
            _ => rng.random(),
        })
        .collect()
}

#[inline]
pub fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
