//! RNG module - deterministic piece generation
//!
//! Three randomizers share one queue type:
//!
//! - **Uniform**: every draw independent (a kind can repeat back-to-back)
//! - **Bag**: the "7-bag" algorithm, one of each kind per shuffled bag
//! - **Sequence**: cycles a fixed list, for scripted play and tests
//!
//! Randomness comes from a small seeded LCG so a seed fully determines a game.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// How the next piece kind is chosen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Independent uniform draws
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds
    Bag,
    /// Repeat this list forever (an empty list falls back to uniform draws)
    Sequence(Vec<PieceKind>),
}

/// Seeded piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    randomizer: Randomizer,
    /// Current bag of pieces (Bag mode)
    bag: [PieceKind; 7],
    /// Index into current bag, or into the sequence
    index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32, randomizer: Randomizer) -> Self {
        // An exhausted bag forces a shuffle on the first Bag draw
        let index = match randomizer {
            Randomizer::Bag => PieceKind::ALL.len(),
            Randomizer::Uniform | Randomizer::Sequence(_) => 0,
        };
        Self {
            randomizer,
            bag: PieceKind::ALL,
            index,
            rng: SimpleRng::new(seed),
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.index = 0;
    }

    fn draw_uniform(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }

    /// Draw the next piece
    pub fn draw(&mut self) -> PieceKind {
        if let Randomizer::Sequence(kinds) = &self.randomizer {
            if !kinds.is_empty() {
                let piece = kinds[self.index % kinds.len()];
                self.index = (self.index + 1) % kinds.len();
                return piece;
            }
        }

        if self.randomizer == Randomizer::Bag {
            if self.index >= self.bag.len() {
                self.refill_bag();
            }
            let piece = self.bag[self.index];
            self.index += 1;
            return piece;
        }

        self.draw_uniform()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1, Randomizer::default())
    }
}
