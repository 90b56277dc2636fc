//! This file contains simple helper functions and test helpers.

/// Returns a mask full of 1s, of `b` bits.
pub const fn mask(b: u32) -> u32 {
    if b >= u32::BITS {
        u32::MAX
    } else {
        (1 << b) - 1
    }
}

#[test]
fn test_masking() {
    assert_eq!(mask(0), 0x0);
    assert_eq!(mask(1), 0x1);
    assert_eq!(mask(8), 255);
    assert_eq!(mask(32), u32::MAX);
}

// Linear-feedback shift register. We use this as a random number generator for
// tests that sample the 32-bit domain.
#[cfg(test)]
pub struct Lfsr {
    state: u32,
}

#[cfg(test)]
impl Lfsr {
    /// Generate a new LFSR number generator.
    pub fn new() -> Lfsr {
        Lfsr { state: 0x13371337 }
    }

    /// Generate a new LFSR number generator that starts with a specific state.
    pub fn new_with_seed(seed: u32) -> Lfsr {
        Lfsr {
            state: 0x13371337 ^ seed,
        }
    }

    fn step(&mut self) {
        let a = (self.state >> 24) & 1;
        let b = (self.state >> 23) & 1;
        let c = (self.state >> 22) & 1;
        let d = (self.state >> 17) & 1;
        let n = a ^ b ^ c ^ d ^ 1;
        self.state <<= 1;
        self.state |= n;
    }

    pub fn get(&mut self) -> u32 {
        let mut res: u32 = 0;
        for _ in 0..32 {
            self.step();
            res <<= 1;
            res ^= self.state & 0x1;
        }
        res
    }
}

#[cfg(test)]
impl Iterator for Lfsr {
    type Item = u32;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.get())
    }
}

#[test]
fn test_lfsr_balance() {
    let mut lfsr = Lfsr::new();

    // Count the number of items, and the number of 1s.
    let mut items = 0;
    let mut ones = 0;

    for _ in 0..10000 {
        let mut u = lfsr.get();
        for _ in 0..32 {
            items += 1;
            ones += u & 1;
            u >>= 1;
        }
    }
    // Make sure that we have around 50% 1s and 50% zeros.
    assert!((ones as f64) < (0.55 * items as f64));
    assert!((ones as f64) > (0.45 * items as f64));
}

#[test]
fn test_seeded_streams_differ() {
    let a: [u32; 4] = core::array::from_fn({
        let mut l = Lfsr::new_with_seed(1);
        move |_| l.get()
    });
    let b: [u32; 4] = core::array::from_fn({
        let mut l = Lfsr::new_with_seed(2);
        move |_| l.get()
    });
    assert_ne!(a, b);
}
