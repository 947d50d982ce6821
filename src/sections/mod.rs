//! Password analysis sections
//!
//! Each section handles one step of the analysis: length gating,
//! character class detection and scoring.

mod length;
mod scoring;
mod variety;

pub use length::{
    LengthGate, MAX_LENGTH, MIN_LENGTH, length_section, too_long_suggestions,
    too_short_suggestions,
};
pub use scoring::scoring_section;
pub use variety::character_variety_section;
