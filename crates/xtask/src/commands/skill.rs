//! Roll a skill check.

use anyhow::Result;
use clap::Parser;
use console::style;
use rules_core::SkillCheckRequest;

use crate::utils::{self, Context};

/// Roll a skill check, optionally against a DC
#[derive(Parser)]
pub struct Skill {
    /// Skill modifier added to the d20
    #[arg(short, long, allow_hyphen_values = true)]
    modifier: i32,

    /// Circumstance bonus or penalty
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    circumstance: i32,

    /// Item bonus
    #[arg(long, default_value_t = 0)]
    item: i32,

    /// Difficulty class; without one the check is rolled but not graded
    #[arg(long)]
    dc: Option<i32>,

    /// Secret check: roll but leave grading to the GM
    #[arg(long)]
    secret: bool,

    /// Seed shared by every participant
    #[arg(short, long)]
    seed: String,
}

impl Skill {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let mut request =
            SkillCheckRequest::new(self.modifier).with_bonuses(self.circumstance, self.item);
        if let Some(dc) = self.dc {
            request = request.against(dc);
        }
        if self.secret {
            request = request.secret();
        }

        let result = ctx.resolver.skill_check(&request, &self.seed);

        if ctx.json {
            return utils::print_json(&result);
        }

        println!(
            "{} {:+}",
            style("Skill check").bold().green(),
            request.total_bonus()
        );
        println!();
        utils::print_field("d20", result.roll);
        utils::print_field("Total", style(result.total).bold());
        match result.outcome {
            Some(outcome) => utils::print_field("Outcome", utils::styled_degree(outcome.degree)),
            None if self.secret => utils::print_field("Outcome", style("secret").dim()),
            None => utils::print_field("Outcome", style("no DC").dim()),
        }

        Ok(())
    }
}
