//! Seedable xorshift32 generator
//!
//! Deterministic per seed so that a seeded simulation replays identically
//! in tests and in the browser.

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Zero is a fixed point of xorshift, so it is remapped to a non-zero seed.
    pub fn new(seed: u32) -> Self {
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fit the f32 mantissa exactly, so 1.0 is never produced.
        (self.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// Uniform in [lo, hi)
    #[inline]
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        let v = lo + self.next_f32() * (hi - lo);
        // Rounding can land exactly on `hi` for wide ranges.
        if v >= hi { lo } else { v }
    }

    /// Uniform index in [0, len). `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        ((self.next_u32() as u64 * len as u64) >> 32) as usize
    }
}
