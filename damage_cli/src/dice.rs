//! Dice for the command line: rolls typed in, or a seeded RNG

use damage_core::dice::{Dice, RngDice, ScriptedDice};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub enum DiceSource {
    /// Physical dice results entered at the table
    Scripted(ScriptedDice),
    Seeded(ChaCha8Rng),
}

impl DiceSource {
    /// Scripted rolls win over a seed; with neither the RNG is seeded from entropy
    pub fn new(rolls: Vec<u32>, seed: Option<u64>) -> Self {
        if !rolls.is_empty() {
            return DiceSource::Scripted(ScriptedDice::new(rolls));
        }
        match seed {
            Some(seed) => DiceSource::Seeded(ChaCha8Rng::seed_from_u64(seed)),
            None => DiceSource::Seeded(ChaCha8Rng::from_entropy()),
        }
    }
}

impl Dice for DiceSource {
    fn roll(&mut self, sides: u32) -> u32 {
        match self {
            DiceSource::Scripted(dice) => dice.roll(sides),
            DiceSource::Seeded(rng) => RngDice(rng).roll(sides),
        }
    }
}
