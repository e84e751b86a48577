//! Dice Module
//!
//! Parses `{count}d{sides}[+|-{modifier}]` expressions and rolls them.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref DICE_RE: Regex = Regex::new(r"^(\d+)d(\d+)(?:([+-])(\d+))?$").expect("dice pattern is valid");
}

/// Error type for dice parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("invalid dice notation: '{0}'")]
    InvalidNotation(String),
    #[error("no dice in '{0}'")]
    NoDice(String),
    #[error("invalid die size in '{0}'")]
    InvalidDieSize(String),
}

/// A parsed dice expression such as `3d8+5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    pub count: u32,
    pub sides: u32,
    pub modifier: i32,
}

impl Dice {
    pub const fn new(count: u32, sides: u32, modifier: i32) -> Self {
        Self { count, sides, modifier }
    }

    /// Lowest value this expression can produce.
    pub fn min(&self) -> i32 {
        self.count as i32 + self.modifier
    }

    /// Highest value this expression can produce.
    pub fn max(&self) -> i32 {
        (self.count * self.sides) as i32 + self.modifier
    }

    /// Same dice with `bonus` added to the modifier.
    pub fn with_modifier(self, bonus: i32) -> Self {
        Self {
            modifier: self.modifier + bonus,
            ..self
        }
    }
}

impl FromStr for Dice {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim();
        let caps = DICE_RE
            .captures(notation)
            .ok_or_else(|| DiceError::InvalidNotation(s.to_string()))?;
        let count: u32 = caps[1].parse().map_err(|_| DiceError::InvalidNotation(s.to_string()))?;
        let sides: u32 = caps[2].parse().map_err(|_| DiceError::InvalidNotation(s.to_string()))?;
        if count == 0 {
            return Err(DiceError::NoDice(s.to_string()));
        }
        if sides == 0 {
            return Err(DiceError::InvalidDieSize(s.to_string()));
        }
        let modifier = match (caps.get(3), caps.get(4)) {
            (Some(sign), Some(value)) => {
                let value: i32 = value
                    .as_str()
                    .parse()
                    .map_err(|_| DiceError::InvalidNotation(s.to_string()))?;
                if sign.as_str() == "-" { -value } else { value }
            },
            _ => 0,
        };
        Ok(Dice { count, sides, modifier })
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

/// Source of dice outcomes for the command resolvers.
pub trait Roller {
    fn roll(&mut self, dice: &Dice) -> i32;

    /// Parse and roll in one step.
    /// # Errors
    /// - if `expr` is not valid dice notation
    fn roll_expr(&mut self, expr: &str) -> Result<i32, DiceError> {
        let dice: Dice = expr.parse()?;
        Ok(self.roll(&dice))
    }
}

/// Roller backed by a `rand` RNG.
#[derive(Debug, Clone)]
pub struct RandomRoller<R = StdRng> {
    rng: R,
}

impl RandomRoller<StdRng> {
    /// Deterministic roller for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> Roller for RandomRoller<R> {
    fn roll(&mut self, dice: &Dice) -> i32 {
        let total: u32 = (0..dice.count).map(|_| self.rng.random_range(1..=dice.sides)).sum();
        let result = total as i32 + dice.modifier;
        debug!("rolled {dice}: {result}");
        result
    }
}

/// Roller that replays queued results, then falls back to each expression's maximum.
///
/// Queued values are clamped into the range of the dice being rolled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    queue: VecDeque<i32>,
}

impl ScriptedRoller {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            queue: values.into_iter().collect(),
        }
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, dice: &Dice) -> i32 {
        match self.queue.pop_front() {
            Some(value) => value.clamp(dice.min(), dice.max()),
            None => dice.max(),
        }
    }
}
