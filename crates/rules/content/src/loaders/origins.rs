//! Ancestry and background catalogs.
//!
//! Catalog entries list modifiers, not targets: a fixed modifier applies to
//! its own ability, while `Free` and `LimitedChoice` modifiers need the
//! player to pick one. [`OriginCatalog::starting_boosts`] pairs the two.

use std::path::Path;

use rules_core::{Ability, AttributeChoice, AttributeModifier, StartingBoosts};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// An ancestry's fixed numbers and attribute adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryDefinition {
    pub name: String,
    pub hit_points: i32,
    pub speed: i32,
    #[serde(default)]
    pub boosts: Vec<AttributeModifier>,
    #[serde(default)]
    pub flaws: Vec<AttributeModifier>,
}

/// A background's attribute boosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundDefinition {
    pub name: String,
    #[serde(default)]
    pub boosts: Vec<AttributeModifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AncestryCatalog {
    ancestries: Vec<AncestryDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BackgroundCatalog {
    backgrounds: Vec<BackgroundDefinition>,
}

/// Loader for ancestry catalogs from RON files.
pub struct AncestryLoader;

impl AncestryLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<AncestryDefinition>> {
        let content = read_file(path)?;
        let catalog: AncestryCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ancestry catalog RON: {}", e))?;

        Ok(catalog.ancestries)
    }
}

/// Loader for background catalogs from RON files.
pub struct BackgroundLoader;

impl BackgroundLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BackgroundDefinition>> {
        let content = read_file(path)?;
        let catalog: BackgroundCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse background catalog RON: {}", e))?;

        Ok(catalog.backgrounds)
    }
}

/// The player's picks for a new character.
///
/// `ancestry` picks are consumed in order by the ancestry's non-fixed boosts
/// and then its non-fixed flaws; `background` picks by the background's
/// non-fixed boosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginPicks {
    pub free: Vec<Ability>,
    pub ancestry: Vec<Ability>,
    pub background: Vec<Ability>,
}

/// All ancestries and backgrounds available at a table.
#[derive(Debug, Clone, Default)]
pub struct OriginCatalog {
    pub ancestries: Vec<AncestryDefinition>,
    pub backgrounds: Vec<BackgroundDefinition>,
}

impl OriginCatalog {
    /// Case-insensitive lookup by name.
    pub fn ancestry(&self, name: &str) -> Option<&AncestryDefinition> {
        self.ancestries
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive lookup by name.
    pub fn background(&self, name: &str) -> Option<&BackgroundDefinition> {
        self.backgrounds
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Resolve an ancestry, a background and the player's picks into the
    /// boosts for `rules_core::build_starting_attributes`.
    pub fn starting_boosts(
        &self,
        ancestry: &str,
        background: &str,
        picks: &OriginPicks,
    ) -> LoadResult<StartingBoosts> {
        let ancestry_def = self
            .ancestry(ancestry)
            .ok_or_else(|| anyhow::anyhow!("Unknown ancestry '{}'", ancestry))?;
        let background_def = self
            .background(background)
            .ok_or_else(|| anyhow::anyhow!("Unknown background '{}'", background))?;

        let mut ancestry_picks = picks.ancestry.iter().copied();
        let ancestry_boosts = assign_targets(&ancestry_def.boosts, &mut ancestry_picks)
            .map_err(|e| anyhow::anyhow!("Ancestry '{}' boosts: {}", ancestry_def.name, e))?;
        let ancestry_flaws = assign_targets(&ancestry_def.flaws, &mut ancestry_picks)
            .map_err(|e| anyhow::anyhow!("Ancestry '{}' flaws: {}", ancestry_def.name, e))?;
        ensure_consumed(ancestry_picks, "ancestry")?;

        let mut background_picks = picks.background.iter().copied();
        let background_boosts = assign_targets(&background_def.boosts, &mut background_picks)
            .map_err(|e| anyhow::anyhow!("Background '{}' boosts: {}", background_def.name, e))?;
        ensure_consumed(background_picks, "background")?;

        Ok(StartingBoosts {
            free: picks.free.iter().copied().map(AttributeChoice::free).collect(),
            ancestry_boosts,
            ancestry_flaws,
            background_boosts,
        })
    }
}

/// Pair each modifier with its target, drawing from `picks` for non-fixed
/// modifiers.
fn assign_targets(
    modifiers: &[AttributeModifier],
    picks: &mut impl Iterator<Item = Ability>,
) -> LoadResult<Vec<AttributeChoice>> {
    modifiers
        .iter()
        .map(|modifier| -> LoadResult<AttributeChoice> {
            let target = match modifier.fixed_ability() {
                Some(ability) => ability,
                None => picks
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing a pick for {} modifier", modifier))?,
            };
            Ok(AttributeChoice::new(*modifier, target))
        })
        .collect()
}

fn ensure_consumed(mut picks: impl Iterator<Item = Ability>, source: &str) -> LoadResult<()> {
    match picks.next() {
        Some(extra) => anyhow::bail!("Unused {} pick '{}'", source, extra),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use rules_core::{AbilitySet, LimitedChoice};

    use super::*;

    fn catalog() -> OriginCatalog {
        OriginCatalog {
            ancestries: vec![AncestryDefinition {
                name: "Elf".into(),
                hit_points: 6,
                speed: 30,
                boosts: vec![
                    AttributeModifier::Dexterity,
                    AttributeModifier::Intelligence,
                    AttributeModifier::Free,
                ],
                flaws: vec![AttributeModifier::Constitution],
            }],
            backgrounds: vec![BackgroundDefinition {
                name: "Scholar".into(),
                boosts: vec![
                    AttributeModifier::LimitedChoice(
                        LimitedChoice::new(AbilitySet::INTELLIGENCE | AbilitySet::WISDOM).unwrap(),
                    ),
                    AttributeModifier::Free,
                ],
            }],
        }
    }

    #[test]
    fn fixed_modifiers_target_themselves() {
        let picks = OriginPicks {
            free: vec![Ability::Dexterity; 4],
            ancestry: vec![Ability::Charisma],
            background: vec![Ability::Wisdom, Ability::Strength],
        };
        let boosts = catalog().starting_boosts("elf", "SCHOLAR", &picks).unwrap();

        let targets = |choices: &[AttributeChoice]| -> Vec<Ability> {
            choices.iter().map(|c| c.target).collect()
        };
        assert_eq!(boosts.free.len(), 4);
        assert_eq!(
            targets(&boosts.ancestry_boosts),
            vec![Ability::Dexterity, Ability::Intelligence, Ability::Charisma]
        );
        assert_eq!(targets(&boosts.ancestry_flaws), vec![Ability::Constitution]);
        assert_eq!(
            targets(&boosts.background_boosts),
            vec![Ability::Wisdom, Ability::Strength]
        );
    }

    #[test]
    fn pick_counts_must_match() {
        let missing = OriginPicks {
            free: vec![Ability::Dexterity; 4],
            ancestry: vec![],
            background: vec![Ability::Wisdom, Ability::Strength],
        };
        let err = catalog().starting_boosts("Elf", "Scholar", &missing).unwrap_err();
        assert!(err.to_string().contains("missing a pick"));

        let extra = OriginPicks {
            free: vec![Ability::Dexterity; 4],
            ancestry: vec![Ability::Charisma, Ability::Wisdom],
            background: vec![Ability::Wisdom, Ability::Strength],
        };
        let err = catalog().starting_boosts("Elf", "Scholar", &extra).unwrap_err();
        assert!(err.to_string().contains("Unused ancestry pick 'wisdom'"));
    }

    #[test]
    fn unknown_names_are_reported() {
        let err = catalog()
            .starting_boosts("Dragon", "Scholar", &OriginPicks::default())
            .unwrap_err();
        assert!(err.to_string().contains("Unknown ancestry 'Dragon'"));
    }
}
