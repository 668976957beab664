//! Ability scores, boosts and flaws.
//!
//! - [`AttributeBlock`]: six scores and their pending partial-boost flags
//! - [`AttributeModifier`]: which abilities a boost or flaw may target
//! - [`advancement`]: character creation and level-up batches
pub mod advancement;

mod ability;
mod block;
mod error;
mod modifier;

pub use ability::{Ability, AbilitySet};
pub use advancement::{
    AttributeChoice, StartingBoosts, apply_level_up, boosts_for_level, build_starting_attributes,
};
pub use block::AttributeBlock;
pub use error::AttributeError;
pub use modifier::{AttributeModifier, LimitedChoice};
