//! RNG module - injectable piece-kind sources
//!
//! The engine never reaches for a global RNG. Every operation that needs a
//! new piece takes a [`PieceSource`], so a seeded generator makes a whole
//! game reproducible.
//!
//! - [`SimpleRng`]: seeded LCG, uniform independent draws (no bag, repeats allowed)
//! - [`CycleSource`]: replays a fixed sequence of kinds

use crate::types::PieceKind;

/// Anything that can hand out the kind of the next spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<T: PieceSource + ?Sized> PieceSource for &mut T {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Takes the high 16 bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        random_kind(self)
    }
}

/// Uniform choice among the seven kinds.
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
    PieceKind::ALL[idx]
}

/// Replays a fixed sequence of kinds, wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl CycleSource {
    /// An empty sequence falls back to `I` pieces.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::I);
        }
        Self { kinds, index: 0 }
    }

    /// A source that only ever produces `kind`.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for CycleSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}
