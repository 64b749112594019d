use serde::{Deserialize, Serialize};
use std::fmt;

/// The four meals served by the mess, in serving order.
///
/// The derived `Ord` follows declaration order, which is the serving order
/// used for every resume-point computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealKind {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}

impl MealKind {
    /// Fixed serving order.
    pub const ALL: [MealKind; 4] = [
        MealKind::Breakfast,
        MealKind::Lunch,
        MealKind::Snacks,
        MealKind::Dinner,
    ];

    /// Number of meals in a day.
    pub const COUNT: usize = 4;

    /// Position of this meal in the serving order (0..=3).
    pub fn index(&self) -> usize {
        match self {
            MealKind::Breakfast => 0,
            MealKind::Lunch => 1,
            MealKind::Snacks => 2,
            MealKind::Dinner => 3,
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealKind::Breakfast => "breakfast",
            MealKind::Lunch => "lunch",
            MealKind::Snacks => "snacks",
            MealKind::Dinner => "dinner",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "breakfast" => Some(MealKind::Breakfast),
            "lunch" => Some(MealKind::Lunch),
            "snacks" => Some(MealKind::Snacks),
            "dinner" => Some(MealKind::Dinner),
            _ => None,
        }
    }

    /// Helper: parse user input (any case, short codes accepted).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "b" | "breakfast" => Some(MealKind::Breakfast),
            "l" | "lunch" => Some(MealKind::Lunch),
            "s" | "snack" | "snacks" => Some(MealKind::Snacks),
            "d" | "dinner" => Some(MealKind::Dinner),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MealKind::Breakfast => "🍳",
            MealKind::Lunch => "🍚",
            MealKind::Snacks => "☕",
            MealKind::Dinner => "🌙",
        }
    }
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
