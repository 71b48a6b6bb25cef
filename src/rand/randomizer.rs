//! Uniform integers, coin flips, element picks and shuffles over a [`RandomSource`].

use super::{Rand, RandomSource};
use crate::error::{GenerateError, Result};

/// Upper bound used by [`Randomizer::random_integer`].
pub const DEFAULT_MAX_VALUE: i64 = 999;

pub struct Randomizer<R = Rand> {
    source: R,
}

impl Randomizer<Rand> {
    pub fn new() -> Self {
        Self::with_source(Rand::new())
    }
}

impl Default for Randomizer<Rand> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Randomizer<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Uniform integer in `[min, max]`. Fails with `InvalidRange` when `max < min`.
    pub fn random_integer_in_range(&mut self, min: i64, max: i64) -> Result<i64> {
        if max < min {
            return Err(GenerateError::InvalidRange { min, max });
        }

        // Span fits in u64 for any i64 pair; 0 means the full 2^64 range.
        let span = (max as i128 - min as i128 + 1) as u64;
        let offset = if span == 0 {
            self.source.next_u64()
        } else {
            self.below(span)
        };

        Ok((min as i128 + offset as i128) as i64)
    }

    /// Uniform integer in `[0, DEFAULT_MAX_VALUE]`.
    pub fn random_integer(&mut self) -> i64 {
        self.below(DEFAULT_MAX_VALUE as u64 + 1) as i64
    }

    pub fn random_boolean(&mut self) -> bool {
        self.source.next_u64() >> 63 == 1
    }

    pub fn random_element<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(GenerateError::EmptySequence);
        }
        let idx = self.random_integer_in_range(0, items.len() as i64 - 1)?;
        Ok(&items[idx as usize])
    }

    /// Fisher-Yates over a copy; `items` is left as it was.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            out.swap(i, j);
        }
        out
    }

    /// Unbiased draw in `[0, n)`, `n > 0`. Rejects the low `2^64 mod n` values
    /// so every residue is hit by the same number of raw words.
    #[inline]
    fn below(&mut self, n: u64) -> u64 {
        let threshold = n.wrapping_neg() % n;
        loop {
            let x = self.source.next_u64();
            if x >= threshold {
                return x % n;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::SeededRand;

    /// Replays a fixed list of words, wrapping around.
    struct Scripted {
        words: Vec<u64>,
        pos: usize,
    }

    impl RandomSource for Scripted {
        fn next_u64(&mut self) -> u64 {
            let w = self.words[self.pos % self.words.len()];
            self.pos += 1;
            w
        }
    }

    fn scripted(words: &[u64]) -> Randomizer<Scripted> {
        Randomizer::with_source(Scripted {
            words: words.to_vec(),
            pos: 0,
        })
    }

    fn seeded(seed: u64) -> Randomizer<SeededRand> {
        Randomizer::with_source(SeededRand::new(seed))
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let mut r = seeded(1);
        assert_eq!(
            r.random_integer_in_range(10, 3),
            Err(GenerateError::InvalidRange { min: 10, max: 3 })
        );
    }

    #[test]
    fn test_range_stays_inside_closed_interval() {
        let mut r = seeded(2);
        for _ in 0..2000 {
            let v = r.random_integer_in_range(-3, 4).unwrap();
            assert!((-3..=4).contains(&v));
        }
    }

    #[test]
    fn test_range_hits_both_ends() {
        let mut r = seeded(3);
        let draws: Vec<i64> = (0..500)
            .map(|_| r.random_integer_in_range(0, 3).unwrap())
            .collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&3));
    }

    #[test]
    fn test_range_single_value() {
        let mut r = seeded(4);
        assert_eq!(r.random_integer_in_range(7, 7), Ok(7));
    }

    #[test]
    fn test_range_full_i64() {
        let mut r = scripted(&[u64::MAX]);
        assert_eq!(r.random_integer_in_range(i64::MIN, i64::MAX), Ok(i64::MAX));
    }

    #[test]
    fn test_below_rejects_biased_words() {
        // n = 3: threshold = 2^64 mod 3 = 1, so word 0 is rejected and 5 gives 5 % 3.
        let mut r = scripted(&[0, 5]);
        assert_eq!(r.random_integer_in_range(0, 2), Ok(2));
    }

    #[test]
    fn test_default_integer_bounds() {
        let mut r = seeded(5);
        for _ in 0..2000 {
            let v = r.random_integer();
            assert!((0..=DEFAULT_MAX_VALUE).contains(&v));
        }
    }

    #[test]
    fn test_boolean_uses_top_bit() {
        let mut r = scripted(&[1 << 63, 1]);
        assert!(r.random_boolean());
        assert!(!r.random_boolean());
    }

    #[test]
    fn test_boolean_roughly_fair() {
        let mut r = seeded(6);
        let trues = (0..4000).filter(|_| r.random_boolean()).count();
        assert!((1700..2300).contains(&trues), "trues = {trues}");
    }

    #[test]
    fn test_element_from_empty_fails() {
        let mut r = seeded(7);
        let empty: [char; 0] = [];
        assert_eq!(r.random_element(&empty), Err(GenerateError::EmptySequence));
    }

    #[test]
    fn test_element_single() {
        let mut r = seeded(8);
        for _ in 0..50 {
            assert_eq!(r.random_element(&['x']), Ok(&'x'));
        }
    }

    #[test]
    fn test_element_member_of_input() {
        let mut r = seeded(9);
        let items = ['a', 'b', 'c', 'd'];
        for _ in 0..200 {
            assert!(items.contains(r.random_element(&items).unwrap()));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut r = seeded(10);
        let input: Vec<u32> = (0..50).collect();
        let mut out = r.shuffle(&input);
        assert_eq!(out.len(), input.len());
        out.sort_unstable();
        assert_eq!(out, input);
    }

    #[test]
    fn test_shuffle_leaves_input_untouched() {
        let mut r = seeded(11);
        let input = vec!['a', 'b', 'c', 'd', 'e'];
        let before = input.clone();
        let _ = r.shuffle(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut r = seeded(12);
        let empty: Vec<char> = Vec::new();
        assert!(r.shuffle(&empty).is_empty());
        assert_eq!(r.shuffle(&['z']), vec!['z']);
    }

    #[test]
    fn test_shuffle_reorders() {
        let mut r = seeded(13);
        let input: Vec<u32> = (0..20).collect();
        let moved = (0..10).any(|_| r.shuffle(&input) != input);
        assert!(moved);
    }
}
