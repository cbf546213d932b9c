//! The HashTable capacity.
//!
//! Apart from holding the number of slots itself, assembles the computations
//! derived from it: the load factor, the resize threshold, and the prime
//! numbers the number of slots is drawn from.

use log::debug;

//  The number of slots used when none is requested.
pub const DEFAULT_SLOTS: usize = 17;

//  The load factor used when the requested one is out of (0, 1].
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

//  Capacity.
//
//  A building block for computations related to the number of slots.
//
//  Invariants:
//  -   `slots` is prime.
//  -   `threshold` is `floor(slots * load_factor)`, hence at most `slots`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capacity {
    slots: usize,
    threshold: usize,
    load_factor: LoadFactor,
}

impl Capacity {
    //  Creates an instance, rounding to the next prime if necessary.
    //
    //  A `slots` of 0 is replaced by `DEFAULT_SLOTS`, and an invalid
    //  `load_factor` by `DEFAULT_LOAD_FACTOR`.
    //
    //  #   Panics
    //
    //  Panics if there is no prime greater than or equal to `slots` which fits
    //  in a `usize`.
    pub fn new(slots: usize, load_factor: f32) -> Self {
        let requested = if slots == 0 { DEFAULT_SLOTS } else { slots };

        let prime = match next_prime(requested) {
            Some(prime) => prime,
            None => panic_capacity_overflow(requested),
        };

        if prime != slots {
            debug!("Requested {} slots, using {} slots", slots, prime);
        }

        Self::with_slots(prime, LoadFactor::new(load_factor))
    }

    //  Returns the number of slots.
    pub fn slots(self) -> usize { self.slots }

    //  Returns the size at or above which the next insertion grows the table.
    pub fn threshold(self) -> usize { self.threshold }

    //  Returns the load factor.
    pub fn load_factor(self) -> f32 { self.load_factor.0 }

    //  Returns whether inserting into a table of `size` elements requires
    //  growing it first.
    pub fn should_grow(self, size: Size) -> bool { size.0 >= self.threshold }

    //  Returns the capacity after growth: the next prime at least twice as
    //  large, with the same load factor.
    //
    //  Returns `None` if the new number of slots overflows.
    pub fn grow(self) -> Option<Self> {
        let doubled = self.slots.checked_mul(2)?;
        let slots = next_prime(doubled)?;

        Some(Self::with_slots(slots, self.load_factor))
    }

    //  Returns the home slot of a given hash.
    pub fn home(self, hash: Hash) -> SlotIndex { SlotIndex(hash.0 % self.slots) }

    //  Returns the slot following `index`, wrapping around.
    pub fn next(self, index: SlotIndex) -> SlotIndex {
        let next = index.0 + 1;
        SlotIndex(if next == self.slots { 0 } else { next })
    }

    fn with_slots(slots: usize, load_factor: LoadFactor) -> Self {
        debug_assert!(is_prime(slots));

        let threshold = (slots as f64 * f64::from(load_factor.0)) as usize;

        Self { slots, threshold, load_factor }
    }
}

/// The hash of a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Hash(pub usize);

/// The number of live elements in the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size(pub usize);

/// The index of a slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SlotIndex(pub usize);

//  LoadFactor.
//
//  Always within (0, 1].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
struct LoadFactor(f32);

impl LoadFactor {
    fn new(load_factor: f32) -> Self {
        //  Also rejects NaN.
        if load_factor > 0.0 && load_factor <= 1.0 {
            Self(load_factor)
        } else {
            debug!("Invalid load factor {}, using {}", load_factor, DEFAULT_LOAD_FACTOR);
            Self(DEFAULT_LOAD_FACTOR)
        }
    }
}

//
//  Implementation Details
//

//  Returns whether `n` is prime.
//
//  Trial division by 2, 3, then by all 6k - 1 and 6k + 1 up to sqrt(n).
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;

    //  `i <= n / i` rather than `i * i <= n`, which may overflow.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}

//  Returns the smallest prime greater than or equal to `n`.
//
//  For practical purposes, the next prime of 0 and 1 is defined as 2.
//
//  Returns `None` if no such prime fits in `usize`.
pub fn next_prime(n: usize) -> Option<usize> {
    if n <= 1 {
        return Some(2);
    }

    let mut candidate = n;

    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }

    Some(candidate)
}

#[cold]
#[inline(never)]
fn panic_capacity_overflow(slots: usize) -> ! {
    panic!("No prime capacity fits {} slots", slots);
}
