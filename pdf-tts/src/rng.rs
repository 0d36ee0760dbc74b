// Randomness used for sample text, voices, accents and file names

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// Source of randomness, swappable so tests can be deterministic
pub trait RandomSource {
    /// Pick an index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Fill `buf` with bytes suitable for unguessable identifiers
    fn fill_bytes(&mut self, buf: &mut [u8]);
}

/// Production randomness: thread RNG for choices, OS RNG for token bytes
#[derive(Debug, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Pick one element of a non-empty slice
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let i = rng.index(items.len());
    items.get(i)
}

#[cfg(test)]
pub mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays a fixed list of indices and fills bytes with a constant
    #[derive(Debug, Default)]
    pub struct ScriptedRandom {
        indices: VecDeque<usize>,
        byte: u8,
    }

    impl ScriptedRandom {
        pub fn new(indices: &[usize]) -> Self {
            Self {
                indices: indices.iter().copied().collect(),
                byte: 0,
            }
        }

        pub fn with_byte(mut self, byte: u8) -> Self {
            self.byte = byte;
            self
        }
    }

    impl RandomSource for ScriptedRandom {
        fn index(&mut self, len: usize) -> usize {
            self.indices.pop_front().unwrap_or(0) % len
        }

        fn fill_bytes(&mut self, buf: &mut [u8]) {
            buf.fill(self.byte);
        }
    }
}
