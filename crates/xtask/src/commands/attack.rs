//! Resolve an attack roll and its damage.

use anyhow::Result;
use clap::Parser;
use console::style;
use rules_core::{AttackRequest, DiceExpression};

use crate::utils::{self, Context};

/// Resolve an attack against an armor class
#[derive(Parser)]
pub struct Attack {
    /// Attack bonus added to the d20
    #[arg(short, long, allow_hyphen_values = true)]
    bonus: i32,

    /// Target armor class
    #[arg(long)]
    ac: i32,

    /// Damage dealt on a hit, e.g. 1d8+4
    #[arg(short, long, value_name = "EXPR")]
    damage: Option<DiceExpression>,

    /// Subtracted from damage after critical doubling
    #[arg(long, default_value_t = 0)]
    reduction: i32,

    /// Roll two d20s and keep the higher
    #[arg(long)]
    advantage: bool,

    /// Roll two d20s and keep the lower
    #[arg(long)]
    disadvantage: bool,

    /// Seed shared by every participant
    #[arg(short, long)]
    seed: String,
}

impl Attack {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let mut request =
            AttackRequest::new(self.bonus, self.ac).with_damage_reduction(self.reduction);
        if let Some(damage) = self.damage {
            request = request.with_damage(damage);
        }
        if self.advantage {
            request = request.with_advantage();
        }
        if self.disadvantage {
            request = request.with_disadvantage();
        }

        let result = ctx.resolver.attack(&request, &self.seed)?;

        if ctx.json {
            return utils::print_json(&result);
        }

        println!(
            "{} {:+} vs AC {} ({})",
            style("Attack").bold().green(),
            self.bonus,
            self.ac,
            result.mode
        );
        println!();
        utils::print_field("d20", utils::format_faces(&result.faces));
        utils::print_field("Total", style(result.total()).bold());
        utils::print_field("Outcome", utils::styled_degree(result.outcome.degree));

        match &result.damage {
            Some(damage) => {
                utils::print_field("Damage faces", utils::format_faces(damage.roll.individual_rolls()));
                utils::print_field(
                    "Damage",
                    format!(
                        "{} - {} = {}",
                        damage.total,
                        damage.reduction,
                        style(damage.final_damage).bold().red()
                    ),
                );
            }
            None if result.is_hit() => utils::print_field("Damage", style("not rolled").dim()),
            None => {}
        }

        Ok(())
    }
}
