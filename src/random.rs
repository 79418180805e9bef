//! Random alphabetic string generation.
//!
//! Two entry points: [`random_alphabets`] samples from one process-wide
//! generator behind a mutex, while [`AlphaGenerator`] is a caller-owned
//! instance that supports seed injection for deterministic output.

use std::sync::{LazyLock, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The 52 ASCII letters, lowercase then uppercase.
const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Seeded from OS entropy on first use and shared by every caller of
// random_alphabets for the lifetime of the process.
static GLOBAL_RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| Mutex::new(StdRng::from_entropy()));

/// Generates a random string of `length` letters from the process-wide
/// generator.
///
/// Each character is sampled independently and uniformly, with replacement,
/// from the 52 ASCII letters; `length == 0` yields the empty string.
/// Concurrent callers serialize on the shared generator's mutex, so code
/// generating in bulk or on hot paths should own an [`AlphaGenerator`]
/// instead.
///
/// The output carries no cryptographic guarantees and must not be used for
/// security-sensitive tokens.
pub fn random_alphabets(length: usize) -> String {
    let mut rng = GLOBAL_RNG.lock().unwrap();
    sample_letters(&mut *rng, length)
}

/// A caller-owned alphabetic string generator.
///
/// Owning the generator avoids the shared mutex behind
/// [`random_alphabets`] and makes output reproducible via [`seeded`].
///
/// [`seeded`]: AlphaGenerator::seeded
pub struct AlphaGenerator<R = StdRng> {
    rng: R,
}

impl AlphaGenerator<StdRng> {
    /// Creates a generator seeded from the operating system's entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed. Identical seeds produce
    /// identical output sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for AlphaGenerator<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> AlphaGenerator<R> {
    /// Wraps an existing RNG, e.g. one private to a worker thread.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produces a string of exactly `length` random letters.
    pub fn generate(&mut self, length: usize) -> String {
        sample_letters(&mut self.rng, length)
    }
}

fn sample_letters<R: Rng>(rng: &mut R, length: usize) -> String {
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let idx = rng.gen_range(0..ALPHABET.len());
        out.push(ALPHABET[idx] as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(random_alphabets(0), "");
        assert_eq!(AlphaGenerator::seeded(7).generate(0), "");
    }

    #[test]
    fn output_has_requested_length() {
        for len in [1, 2, 16, 1000] {
            assert_eq!(random_alphabets(len).len(), len);
        }
    }

    #[test]
    fn output_is_alphabetic_ascii() {
        let s = random_alphabets(4096);
        assert!(s.bytes().all(|b| b.is_ascii_alphabetic()));
    }

    #[test]
    fn same_seed_same_output() {
        let a = AlphaGenerator::seeded(42).generate(64);
        let b = AlphaGenerator::seeded(42).generate(64);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        // 64 characters of agreement across different seeds would mean the
        // seed is being ignored.
        let a = AlphaGenerator::seeded(1).generate(64);
        let b = AlphaGenerator::seeded(2).generate(64);
        assert_ne!(a, b);
    }

    #[test]
    fn accepts_external_rng() {
        let mut gen = AlphaGenerator::with_rng(ChaCha8Rng::seed_from_u64(9));
        let s = gen.generate(32);
        assert_eq!(s.len(), 32);
        assert!(s.bytes().all(|b| b.is_ascii_alphabetic()));
    }

    #[test]
    fn every_letter_is_reachable() {
        // 26k draws make a missing letter astronomically unlikely under a
        // uniform sampler.
        let s = AlphaGenerator::seeded(1234).generate(26_000);
        for letter in ALPHABET.iter() {
            assert!(
                s.as_bytes().contains(letter),
                "letter {:?} never sampled",
                *letter as char
            );
        }
    }
}
