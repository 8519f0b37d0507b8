use super::pain_level::{EmojiTier, PainInfo, PainLevel};
use crate::core::scale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded pain event.
///
/// The JSON shape matches what the web version of the journal kept in local
/// storage, so payloads saved there load unchanged (extra keys are ignored).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,                // creation time, ms since epoch (bumped on collision)
    pub pain_level: PainLevel,  // 0..=10
    #[serde(default)]
    pub note: String,           // may be empty
    pub timestamp: DateTime<Utc>, // user-chosen date + time, stored as UTC
    pub pain_info: PainInfo,    // snapshot of the scale row at creation time
}

impl Entry {
    pub fn emoji(&self) -> EmojiTier {
        scale::emoji_for(self.pain_level)
    }

    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}
