//! Dice - the injectable randomness source used during resolution
//!
//! Resolution draws at most two kinds of random numbers: the Kinetic bonus
//! die and the crew hit percentile roll. Both go through [`Dice`] so callers
//! can use a seeded RNG, a thread RNG, or rolls typed in from the table.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Source of die rolls
pub trait Dice {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`
    fn roll(&mut self, sides: u32) -> u32;
}

/// Dice backed by any [`rand::Rng`]
pub struct RngDice<'a, R: Rng + ?Sized>(pub &'a mut R);

impl<R: Rng + ?Sized> Dice for RngDice<'_, R> {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.0.gen_range(1..=sides)
    }
}

/// Dice that replay a fixed list of results in order
///
/// Values are clamped into `1..=sides` of whatever die is being rolled. Once
/// the list is used up every further roll comes back as 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        ScriptedDice {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of scripted rolls not yet consumed
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        match self.rolls.pop_front() {
            Some(value) => value.clamp(1, sides),
            None => {
                tracing::warn!(sides, "scripted dice exhausted, rolling 1");
                1
            }
        }
    }
}

/// Malformed dice expression
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("dice expression is empty")]
    Empty,
    #[error("invalid dice term: {0:?}")]
    InvalidTerm(String),
    #[error("dice must have at least one side: {0:?}")]
    ZeroSides(String),
}

/// One signed term of a dice expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiceTerm {
    Dice { count: u32, sides: u32, negative: bool },
    Flat { value: i32 },
}

/// A damage roll such as `4d10 + 24`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpression {
    pub terms: Vec<DiceTerm>,
}

impl DiceExpression {
    /// Roll every term and sum the results
    pub fn roll(&self, dice: &mut impl Dice) -> i32 {
        self.terms
            .iter()
            .map(|term| match *term {
                DiceTerm::Dice {
                    count,
                    sides,
                    negative,
                } => {
                    let total = (0..count).fold(0i32, |total, _| {
                        total.saturating_add(i32::try_from(dice.roll(sides)).unwrap_or(i32::MAX))
                    });
                    if negative {
                        -total
                    } else {
                        total
                    }
                }
                DiceTerm::Flat { value } => value,
            })
            .fold(0, i32::saturating_add)
    }
}

fn parse_term(raw: &str, negative: bool) -> Result<DiceTerm, DiceError> {
    let lower = raw.to_ascii_lowercase();
    match lower.split_once('d') {
        Some((count, sides)) => {
            let count = if count.is_empty() {
                1
            } else {
                count
                    .parse::<u32>()
                    .map_err(|_| DiceError::InvalidTerm(raw.to_string()))?
            };
            let sides = sides
                .parse::<u32>()
                .map_err(|_| DiceError::InvalidTerm(raw.to_string()))?;
            if sides == 0 {
                return Err(DiceError::ZeroSides(raw.to_string()));
            }
            Ok(DiceTerm::Dice {
                count,
                sides,
                negative,
            })
        }
        None => {
            let value = lower
                .parse::<i32>()
                .map_err(|_| DiceError::InvalidTerm(raw.to_string()))?;
            Ok(DiceTerm::Flat {
                value: if negative { -value } else { value },
            })
        }
    }
}

impl FromStr for DiceExpression {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(DiceError::Empty);
        }

        let mut terms = Vec::new();
        let mut current = String::new();
        let mut negative = false;

        for c in compact.chars() {
            if c == '+' || c == '-' {
                if !current.is_empty() {
                    terms.push(parse_term(&current, negative)?);
                    current.clear();
                } else if !terms.is_empty() || negative {
                    // "4d10 +- 2" or a doubled sign
                    return Err(DiceError::InvalidTerm(compact.clone()));
                }
                negative = c == '-';
            } else {
                current.push(c);
            }
        }

        if current.is_empty() {
            return Err(DiceError::InvalidTerm(compact));
        }
        terms.push(parse_term(&current, negative)?);

        Ok(DiceExpression { terms })
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let (negative, body) = match *term {
                DiceTerm::Dice {
                    count,
                    sides,
                    negative,
                } => (negative, format!("{}d{}", count, sides)),
                DiceTerm::Flat { value } => (value < 0, value.abs().to_string()),
            };
            match (i, negative) {
                (0, true) => write!(f, "-{}", body)?,
                (0, false) => write!(f, "{}", body)?,
                (_, true) => write!(f, " - {}", body)?,
                (_, false) => write!(f, " + {}", body)?,
            }
        }
        Ok(())
    }
}
