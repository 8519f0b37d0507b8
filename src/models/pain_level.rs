use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest value on the pain scale.
pub const MAX_LEVEL: u8 = 10;

/// A validated pain intensity in `0..=10`.
///
/// Raw user input enters through [`PainLevel::from_input`]; everything past
/// that boundary can index the scale table without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PainLevel(u8);

impl PainLevel {
    pub fn new(level: u8) -> AppResult<Self> {
        if level > MAX_LEVEL {
            return Err(AppError::OutOfRangePainLevel(i64::from(level)));
        }
        Ok(Self(level))
    }

    /// Validate a level coming straight from the user (CLI argument, form field).
    pub fn from_input(raw: i64) -> AppResult<Self> {
        match u8::try_from(raw) {
            Ok(level) if level <= MAX_LEVEL => Ok(Self(level)),
            _ => Err(AppError::OutOfRangePainLevel(raw)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All levels, lowest first.
    pub fn all() -> impl Iterator<Item = PainLevel> {
        (0..=MAX_LEVEL).map(PainLevel)
    }
}

impl TryFrom<u8> for PainLevel {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PainLevel::new(value)
    }
}

impl From<PainLevel> for u8 {
    fn from(level: PainLevel) -> Self {
        level.0
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::None => "NONE",
            Category::Mild => "MILD",
            Category::Moderate => "MODERATE",
            Category::Severe => "SEVERE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification snapshot copied onto each entry when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainInfo {
    pub label: String,
    pub category: Category,
    pub color: String,
}

/// Face shown next to a level. Ordered from calm to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmojiTier {
    Calm,
    Slight,
    Neutral,
    Worried,
    Anxious,
    Screaming,
}

impl EmojiTier {
    pub fn glyph(&self) -> &'static str {
        match self {
            EmojiTier::Calm => "😊",
            EmojiTier::Slight => "🙂",
            EmojiTier::Neutral => "😐",
            EmojiTier::Worried => "😟",
            EmojiTier::Anxious => "😰",
            EmojiTier::Screaming => "😱",
        }
    }

    /// Position of the tier, `0` (calm) to `5` (screaming).
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}
