//! Roll initiative for a group of participants.

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use rules_core::order_initiative;

use crate::utils::{self, Context};

/// Roll and order initiative
#[derive(Parser)]
pub struct Initiative {
    /// Participants as NAME=BONUS, e.g. goblin=2 fighter=5
    #[arg(value_name = "NAME=BONUS", required = true, value_parser = parse_participant)]
    participants: Vec<(String, i32)>,

    /// Seed prefix; each participant rolls with `<seed>_<name>`
    #[arg(short, long)]
    seed: String,
}

fn parse_participant(value: &str) -> Result<(String, i32), String> {
    let (name, bonus) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=BONUS, got '{value}'"))?;
    let bonus = bonus
        .trim()
        .parse()
        .map_err(|_| format!("invalid bonus in '{value}'"))?;
    Ok((name.trim().to_string(), bonus))
}

impl Initiative {
    pub fn execute(self, ctx: &Context) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in &self.participants {
            if !seen.insert(name.as_str()) {
                bail!("Duplicate participant '{}'", name);
            }
        }

        let mut entries: Vec<_> = self
            .participants
            .into_iter()
            .map(|(name, bonus)| {
                let seed = format!("{}_{}", self.seed, name);
                ctx.resolver.initiative(name, bonus, &seed)
            })
            .collect();
        order_initiative(&mut entries);

        if ctx.json {
            return utils::print_json(&entries);
        }

        println!("{}", style("=== Initiative Order ===").bold().green());
        println!();
        for (turn, entry) in entries.iter().enumerate() {
            println!(
                "  {}. {:<16} {:>3}  ({:+})",
                turn + 1,
                entry.participant,
                style(entry.initiative).bold(),
                entry.bonus
            );
        }

        Ok(())
    }
}
