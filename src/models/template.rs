use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy used to derive the date span of a pause request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PauseTemplate {
    /// Tomorrow fully paused, day after tomorrow is the boundary day.
    Tomorrow,
    /// Friday through Sunday fully paused, Monday is the boundary day.
    Weekend,
    /// User-supplied start and end dates.
    Custom,
}

impl PauseTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            PauseTemplate::Tomorrow => "tomorrow",
            PauseTemplate::Weekend => "weekend",
            PauseTemplate::Custom => "custom",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "tomorrow" => Some(PauseTemplate::Tomorrow),
            "weekend" => Some(PauseTemplate::Weekend),
            "custom" => Some(PauseTemplate::Custom),
            _ => None,
        }
    }

    /// Templates whose span is computed rather than supplied.
    pub fn is_fixed_span(&self) -> bool {
        !matches!(self, PauseTemplate::Custom)
    }
}

impl fmt::Display for PauseTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
