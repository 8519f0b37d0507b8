//! The fixed 11-point pain scale.

use crate::models::pain_level::{Category, EmojiTier, PainInfo, PainLevel};

/// One row of the scale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRow {
    pub level: u8,
    pub label: &'static str,
    pub category: Category,
    pub color: &'static str,
}

impl ScaleRow {
    pub fn snapshot(&self) -> PainInfo {
        PainInfo {
            label: self.label.to_string(),
            category: self.category,
            color: self.color.to_string(),
        }
    }
}

const fn row(level: u8, label: &'static str, category: Category, color: &'static str) -> ScaleRow {
    ScaleRow {
        level,
        label,
        category,
        color,
    }
}

/// Indexed by level.
pub static PAIN_SCALE: [ScaleRow; 11] = [
    row(0, "No Pain", Category::None, "bg-green-500"),
    row(1, "Very Mild", Category::None, "bg-green-400"),
    row(2, "Discomforting", Category::Mild, "bg-green-300"),
    row(3, "Tolerable", Category::Mild, "bg-yellow-300"),
    row(4, "Distressing", Category::Moderate, "bg-yellow-400"),
    row(5, "Very Distressing", Category::Moderate, "bg-yellow-500"),
    row(6, "Intense", Category::Moderate, "bg-orange-400"),
    row(7, "Very Intense", Category::Severe, "bg-orange-500"),
    row(8, "Utterly Horrible", Category::Severe, "bg-red-500"),
    row(9, "Unbearable", Category::Severe, "bg-red-600"),
    row(10, "Unspeakable", Category::Severe, "bg-red-700"),
];

pub fn row_for(level: PainLevel) -> &'static ScaleRow {
    &PAIN_SCALE[usize::from(level.value())]
}

/// Classification for `level`, as a snapshot that can be stored on an entry.
pub fn lookup(level: PainLevel) -> PainInfo {
    row_for(level).snapshot()
}

/// Face for `level`. Banded independently of the table.
pub fn emoji_for(level: PainLevel) -> EmojiTier {
    match level.value() {
        0 => EmojiTier::Calm,
        1..=2 => EmojiTier::Slight,
        3..=4 => EmojiTier::Neutral,
        5..=6 => EmojiTier::Worried,
        7..=8 => EmojiTier::Anxious,
        _ => EmojiTier::Screaming,
    }
}
