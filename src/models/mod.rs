pub mod chart;
pub mod entry;
pub mod pain_level;
