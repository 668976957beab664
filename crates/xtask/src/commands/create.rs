//! Build a level 1 attribute block from catalog origins.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use console::style;
use rules_content::{ContentFactory, OriginPicks};
use rules_core::{Ability, AttributeBlock, build_starting_attributes};
use serde::Serialize;

use crate::utils::{self, Context};

/// Build starting attributes from an ancestry and background
#[derive(Parser)]
pub struct Create {
    /// Ancestry name from ancestries.ron
    #[arg(short, long)]
    ancestry: String,

    /// Background name from backgrounds.ron
    #[arg(short, long)]
    background: String,

    /// Free boosts, comma separated (at least four)
    #[arg(long, value_delimiter = ',', value_parser = utils::parse_ability)]
    free: Vec<Ability>,

    /// Targets for the ancestry's free boosts, then its free flaws
    #[arg(long, value_delimiter = ',', value_parser = utils::parse_ability)]
    ancestry_picks: Vec<Ability>,

    /// Targets for the background's choice and free boosts
    #[arg(long, value_delimiter = ',', value_parser = utils::parse_ability)]
    background_picks: Vec<Ability>,

    /// Content directory (defaults to the bundled catalogs)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Serialize)]
struct CreateReport<'a> {
    ancestry: &'a str,
    background: &'a str,
    hit_points: i32,
    speed: i32,
    attributes: AttributeBlock,
    modifiers: [i32; 6],
}

impl Create {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let factory = match &self.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        let config = match ctx.config_path {
            Some(_) => ctx.config().clone(),
            None => factory.load_config()?,
        };
        let origins = factory
            .load_origins()
            .with_context(|| format!("Failed to load catalogs from {}", factory.data_dir().display()))?;

        let picks = OriginPicks {
            free: self.free,
            ancestry: self.ancestry_picks,
            background: self.background_picks,
        };
        let boosts = origins.starting_boosts(&self.ancestry, &self.background, &picks)?;
        let block = build_starting_attributes(&boosts, &config)?;

        // starting_boosts already resolved the ancestry
        let ancestry = origins
            .ancestry(&self.ancestry)
            .context("ancestry disappeared from catalog")?;
        let modifiers = Ability::ALL.map(|ability| block.modifier(ability));

        if ctx.json {
            return utils::print_json(&CreateReport {
                ancestry: &ancestry.name,
                background: &self.background,
                hit_points: ancestry.hit_points,
                speed: ancestry.speed,
                attributes: block,
                modifiers,
            });
        }

        println!(
            "{} {} {}",
            style("New character:").bold().green(),
            ancestry.name,
            self.background
        );
        println!();
        utils::print_field("Ancestry HP", ancestry.hit_points);
        utils::print_field("Speed", format!("{} ft", ancestry.speed));
        println!();
        println!("{}", style("Attributes:").bold().yellow());
        for (ability, modifier) in Ability::ALL.into_iter().zip(modifiers) {
            println!(
                "  {:<13} {:>2}  ({:+})",
                ability,
                block.score(ability),
                modifier
            );
        }

        Ok(())
    }
}
