//! Health Module
//!
//! A bounded gauge used for hit points and mana points.
use std::cmp;
use std::fmt;

/// Current and total value of a depletable resource. `current` never leaves `[0, total]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Points {
    current: u32,
    total: u32,
}

impl Points {
    /// Create a full gauge.
    pub fn new_at_max(total: u32) -> Points {
        Points { current: total, total }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Remove points. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Add points, capped at the total. Returns how many were actually added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = cmp::min(self.total, self.current.saturating_add(amount));
        self.current - before
    }

    /// Spend `amount` if available.
    pub fn spend(&mut self, amount: u32) -> bool {
        if self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}
