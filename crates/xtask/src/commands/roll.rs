//! Roll a dice expression with an agreed seed.

use anyhow::{Context as _, Result};
use clap::Parser;
use console::style;
use rules_core::{CheckRequest, DiceExpression};
use serde::Serialize;

use crate::utils::{self, Context};

/// Roll a dice expression
#[derive(Parser)]
pub struct Roll {
    /// Dice notation, e.g. 2d6+3 or 4d6kh3
    #[arg(value_name = "EXPR")]
    expression: DiceExpression,

    /// Seed shared by every participant
    #[arg(short, long)]
    seed: String,

    /// Extra modifier added on top of the expression
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    modifier: i32,

    /// Grade the total against this DC
    #[arg(long)]
    dc: Option<i32>,
}

#[derive(Serialize)]
struct RollReport {
    #[serde(flatten)]
    check: rules_core::CheckResult,
    commitment: String,
}

impl Roll {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let mut request = CheckRequest::new(self.expression).with_modifier(self.modifier);
        if let Some(dc) = self.dc {
            request = request.against(dc);
        }

        let result = ctx.resolver.check(&request, &self.seed);
        let commitment = hex::encode(
            result
                .roll
                .commitment()
                .context("Failed to encode roll for its commitment")?,
        );

        if ctx.json {
            return utils::print_json(&RollReport {
                check: result,
                commitment,
            });
        }

        println!(
            "{} {} (seed {})",
            style("Rolling").bold().green(),
            self.expression,
            style(&self.seed).dim()
        );
        println!();
        utils::print_field("Faces", utils::format_faces(result.roll.individual_rolls()));
        utils::print_field("Modifier", result.roll.modifier() + self.modifier);
        utils::print_field("Total", style(result.total).bold());
        if let Some(natural) = result.natural {
            utils::print_field("Natural", natural);
        }
        if let Some(degree) = result.degree {
            utils::print_field("Outcome", utils::styled_degree(degree));
        }
        utils::print_field("Commitment", style(commitment).dim());

        Ok(())
    }
}
