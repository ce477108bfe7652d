use std::ops::Range;
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rstest::fixture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u64);

/// Fresh seed per test invocation. The seed is printed so that a failing run
/// can be reproduced by pinning it.
#[fixture]
pub fn random_seed() -> Seed {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Clock before unix epoch")
        .subsec_nanos();
    let seed = Seed(u64::from(seed));
    println!("Using random seed: {}", seed.0);
    seed
}

pub fn make_seedable_rng(seed: Seed) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed.0)
}

fn gen_len(rng: &mut impl RngCore, len_range: Range<usize>) -> usize {
    assert!(!len_range.is_empty(), "Empty length range");
    let span = (len_range.end - len_range.start) as u64;
    len_range.start + usize::try_from(rng.next_u64() % span).expect("Span fits in usize")
}

pub fn gen_random_bytes(rng: &mut impl RngCore, len_range: Range<usize>) -> Vec<u8> {
    let mut result = vec![0_u8; gen_len(rng, len_range)];
    rng.fill_bytes(&mut result);
    result
}

pub fn gen_random_string(rng: &mut impl RngCore, len_range: Range<usize>) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let len = gen_len(rng, len_range);
    (0..len)
        .map(|_| {
            let idx = usize::try_from(rng.next_u64() % ALPHABET.len() as u64)
                .expect("Index fits in usize");
            char::from(ALPHABET[idx])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_output() {
        let mut rng1 = make_seedable_rng(Seed(42));
        let mut rng2 = make_seedable_rng(Seed(42));
        assert_eq!(
            gen_random_bytes(&mut rng1, 10..20),
            gen_random_bytes(&mut rng2, 10..20)
        );
        assert_eq!(
            gen_random_string(&mut rng1, 10..20),
            gen_random_string(&mut rng2, 10..20)
        );
    }

    #[test]
    fn lengths_stay_in_range() {
        let mut rng = make_seedable_rng(Seed(7));
        for _ in 0..100 {
            let bytes = gen_random_bytes(&mut rng, 5..10);
            assert!(bytes.len() >= 5 && bytes.len() < 10);
        }
    }
}
