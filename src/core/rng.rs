//! RNG module - piece sequence generation
//!
//! Two policies are supported:
//!
//! - `Bag`: the "7-bag" scheme. All seven kinds are shuffled once and handed
//!   out without repetition until the bag empties, then reshuffled. Every
//!   kind appears exactly once per seven spawns.
//! - `Uniform`: an independent uniform draw per spawn.
//!
//! Randomness comes from a small seeded LCG so a session is reproducible
//! from its seed.

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state (usable as a seed to continue the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Which sequence policy a [`Randomizer`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomizerPolicy {
    #[default]
    Bag,
    Uniform,
}

/// Generates the sequence of upcoming piece kinds.
///
/// The next kind is always pre-drawn so the engine can expose a one-piece
/// preview regardless of policy.
#[derive(Debug, Clone)]
pub struct Randomizer {
    policy: RandomizerPolicy,
    bag: [PieceKind; 7],
    bag_index: usize,
    next: PieceKind,
    rng: SimpleRng,
}

impl Randomizer {
    pub fn new(policy: RandomizerPolicy, seed: u32) -> Self {
        let mut randomizer = Self {
            policy,
            bag: PieceKind::ALL,
            // Empty until the first generate() refills it.
            bag_index: 7,
            next: PieceKind::I,
            rng: SimpleRng::new(seed),
        };
        randomizer.next = randomizer.generate();
        randomizer
    }

    pub fn policy(&self) -> RandomizerPolicy {
        self.policy
    }

    /// Peek at the upcoming kind without consuming it
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Draw the next kind and pre-generate its successor
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.next;
        self.next = self.generate();
        kind
    }

    /// Current RNG state (for restarting with a continued sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }

    fn generate(&mut self) -> PieceKind {
        match self.policy {
            RandomizerPolicy::Uniform => {
                PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            RandomizerPolicy::Bag => {
                if self.bag_index >= self.bag.len() {
                    self.bag = PieceKind::ALL;
                    self.rng.shuffle(&mut self.bag);
                    self.bag_index = 0;
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }
}

impl Default for Randomizer {
    fn default() -> Self {
        Self::new(RandomizerPolicy::Bag, 1)
    }
}
