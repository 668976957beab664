//! Derived statistic formulas.
//!
//! Every function here is total over already-validated integers: nothing
//! fails, allocates or reads state. Optional bonuses from the character
//! sheet are passed as `0` when absent.

use super::ProficiencyRank;

/// Base for every DC-style statistic.
const DC_BASE: i32 = 10;

/// Minimum land speed in feet.
pub const MIN_SPEED: i32 = 5;

/// `floor((score - 10) / 2)`
pub const fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Lowest score producing `modifier`.
pub const fn modifier_to_score(modifier: i32) -> i32 {
    modifier * 2 + 10
}

pub const fn proficiency_bonus(rank: ProficiencyRank, level: i32) -> i32 {
    rank.bonus(level)
}

/// Armor class.
///
/// ```text
/// 10 + min(dex_mod, dex_cap) + proficiency_bonus + armor_bonus + shield_bonus
/// ```
///
/// Without a cap the full Dexterity modifier applies.
pub fn armor_class(
    dex_modifier: i32,
    proficiency_bonus: i32,
    armor_bonus: i32,
    dex_cap: Option<i32>,
    shield_bonus: i32,
) -> i32 {
    let dex = dex_cap.map_or(dex_modifier, |cap| dex_modifier.min(cap));
    DC_BASE + dex + proficiency_bonus + armor_bonus + shield_bonus
}

pub const fn saving_throw(
    ability_modifier: i32,
    rank: ProficiencyRank,
    level: i32,
    item_bonus: i32,
) -> i32 {
    ability_modifier + rank.bonus(level) + item_bonus
}

/// Skill modifier. The armor check penalty counts by magnitude, whatever
/// its sign. Saturates at the `i32` bounds.
pub const fn skill_modifier(
    ability_modifier: i32,
    rank: ProficiencyRank,
    level: i32,
    item_bonus: i32,
    armor_check_penalty: i32,
) -> i32 {
    ability_modifier
        .saturating_add(rank.bonus(level))
        .saturating_add(item_bonus)
        .saturating_sub(armor_check_penalty.saturating_abs())
}

/// Attack modifier for a weapon strike (Strength for melee, Dexterity for
/// ranged).
pub const fn strike_modifier(
    ability_modifier: i32,
    weapon_rank: ProficiencyRank,
    level: i32,
    item_bonus: i32,
) -> i32 {
    ability_modifier + weapon_rank.bonus(level) + item_bonus
}

pub const fn class_dc(
    key_modifier: i32,
    rank: ProficiencyRank,
    level: i32,
    item_bonus: i32,
) -> i32 {
    DC_BASE + rank.bonus(level) + key_modifier + item_bonus
}

pub const fn spell_attack(
    key_modifier: i32,
    rank: ProficiencyRank,
    level: i32,
    item_bonus: i32,
) -> i32 {
    key_modifier + rank.bonus(level) + item_bonus
}

pub const fn spell_dc(
    key_modifier: i32,
    rank: ProficiencyRank,
    level: i32,
    item_bonus: i32,
) -> i32 {
    DC_BASE + key_modifier + rank.bonus(level) + item_bonus
}

pub const fn perception(
    wisdom_modifier: i32,
    rank: ProficiencyRank,
    level: i32,
    item_bonus: i32,
) -> i32 {
    wisdom_modifier + rank.bonus(level) + item_bonus
}

/// Initiative bonus. With an untrained rank this is `dex_mod + item_bonus`.
pub const fn initiative(
    ability_modifier: i32,
    rank: ProficiencyRank,
    level: i32,
    item_bonus: i32,
) -> i32 {
    ability_modifier + rank.bonus(level) + item_bonus
}

/// `ancestry_hp + class_hp_per_level × level + con_mod × level`
pub const fn max_hp(ancestry_hp: i32, class_hp_per_level: i32, level: i32, con_modifier: i32) -> i32 {
    ancestry_hp + class_hp_per_level * level + con_modifier * level
}

/// Carrying thresholds in Bulk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulkLimits {
    /// Above this the character is encumbered.
    pub encumbered: i32,
    /// Most Bulk the character can carry.
    pub maximum: i32,
}

pub const fn bulk_limits(strength_modifier: i32) -> BulkLimits {
    BulkLimits {
        encumbered: 5 + strength_modifier,
        maximum: 10 + strength_modifier,
    }
}

/// Land speed in feet, never below [`MIN_SPEED`].
pub fn speed(base: i32, modifiers: i32, armor_penalty: i32) -> i32 {
    base.saturating_add(modifiers)
        .saturating_sub(armor_penalty.saturating_abs())
        .max(MIN_SPEED)
}
