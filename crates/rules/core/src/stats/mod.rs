//! Derived statistics.
//!
//! Pure formulas turning ability modifiers, proficiency ranks and level into
//! the numbers on a character sheet. A sheet composer calls these
//! repeatedly; nothing here is stored.

pub mod derived;
pub mod proficiency;

pub use derived::{
    BulkLimits, MIN_SPEED, armor_class, bulk_limits, class_dc, initiative, max_hp, modifier,
    modifier_to_score, perception, proficiency_bonus, saving_throw, skill_modifier, speed,
    spell_attack, spell_dc, strike_modifier,
};
pub use proficiency::ProficiencyRank;
