//! Resolve a saving throw.

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::utils::{self, Context};

/// Resolve a saving throw against a DC
#[derive(Parser)]
pub struct Save {
    /// Save modifier added to the d20
    #[arg(short, long, allow_hyphen_values = true)]
    modifier: i32,

    /// Difficulty class
    #[arg(long)]
    dc: i32,

    /// Seed shared by every participant
    #[arg(short, long)]
    seed: String,
}

impl Save {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let outcome = ctx.resolver.saving_throw(self.modifier, self.dc, &self.seed);

        if ctx.json {
            return utils::print_json(&outcome);
        }

        println!(
            "{} {:+} vs DC {}",
            style("Saving throw").bold().green(),
            self.modifier,
            self.dc
        );
        println!();
        utils::print_field("d20", outcome.roll);
        utils::print_field("Total", style(outcome.total).bold());
        utils::print_field("Outcome", utils::styled_degree(outcome.degree));

        Ok(())
    }
}
