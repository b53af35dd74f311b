//! Seeded Test Data
//!
//! Reproducible random magnitudes for benchmarks, differential tests and the
//! driver binary.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Benchmark inputs as `(length in bytes, seed)`
pub const BENCH_SIZES: [(usize, u64); 3] = [(100, 4), (50, 5), (25, 6)];

/// Fill a little-endian magnitude buffer of `len` bytes from `seed`
///
/// The top byte may be zero, just like an unsigned value built from
/// arbitrary random bytes.
pub fn random_magnitude(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}
