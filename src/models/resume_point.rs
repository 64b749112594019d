use super::meal_kind::MealKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of the first meal eaten on the boundary day.
///
/// Meals with index `< k` are paused, meals with index `>= k` are eaten.
/// `k == 4` pauses the whole boundary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct ResumePoint(u8);

impl ResumePoint {
    /// Everything is eaten on the boundary day.
    pub const FIRST_MEAL: ResumePoint = ResumePoint(0);

    /// Nothing is eaten on the boundary day.
    pub const FULL_PAUSE: ResumePoint = ResumePoint(MealKind::COUNT as u8);

    pub fn new(k: usize) -> Option<Self> {
        if k <= MealKind::COUNT {
            Some(ResumePoint(k as u8))
        } else {
            None
        }
    }

    /// Resume point whose first eaten meal is `meal`.
    pub fn from_meal(meal: MealKind) -> Self {
        ResumePoint(meal.index() as u8)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// First meal eaten on the boundary day, `None` for a full pause.
    pub fn first_eaten(&self) -> Option<MealKind> {
        MealKind::from_index(self.index())
    }

    /// Meals paused on the boundary day (prefix of the serving order).
    pub fn paused_meals(&self) -> &'static [MealKind] {
        &MealKind::ALL[..self.index()]
    }

    /// Meals eaten on the boundary day (suffix of the serving order).
    pub fn eaten_meals(&self) -> &'static [MealKind] {
        &MealKind::ALL[self.index()..]
    }

    pub fn is_full_pause(&self) -> bool {
        self.index() == MealKind::COUNT
    }
}

impl TryFrom<u8> for ResumePoint {
    type Error = String;

    fn try_from(k: u8) -> Result<Self, Self::Error> {
        ResumePoint::new(k as usize)
            .ok_or_else(|| format!("resume point {} out of range 0..={}", k, MealKind::COUNT))
    }
}

impl Default for ResumePoint {
    fn default() -> Self {
        ResumePoint::FULL_PAUSE
    }
}

impl fmt::Display for ResumePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_eaten() {
            Some(meal) => write!(f, "resume from {}", meal),
            None => f.write_str("no meals"),
        }
    }
}
