//! Shared state and output helpers for xtask commands

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use console::style;
use rules_content::ConfigLoader;
use rules_core::{DegreeOfSuccess, Resolver, RulesConfig};
use serde::Serialize;

/// Settings shared by every command.
pub struct Context {
    pub resolver: Resolver,
    pub json: bool,
    pub config_path: Option<PathBuf>,
}

impl Context {
    pub fn load(config_path: Option<&Path>, json: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load rules config: {}", path.display()))?,
            None => RulesConfig::default(),
        };
        tracing::debug!(?config, "rules config ready");

        Ok(Self {
            resolver: Resolver::new(config),
            json,
            config_path: config_path.map(Path::to_path_buf),
        })
    }

    pub fn config(&self) -> &RulesConfig {
        self.resolver.config()
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result to JSON")?;
    println!("{}", json);
    Ok(())
}

/// Print a bold `label:` followed by `value`.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", style(format!("{label}:")).bold().cyan(), value);
}

/// Degree of success colored by outcome.
pub fn styled_degree(degree: DegreeOfSuccess) -> String {
    let text = degree.to_string();
    match degree {
        DegreeOfSuccess::CriticalSuccess => style(text).bold().green().to_string(),
        DegreeOfSuccess::Success => style(text).green().to_string(),
        DegreeOfSuccess::Failure => style(text).yellow().to_string(),
        DegreeOfSuccess::CriticalFailure => style(text).bold().red().to_string(),
    }
}

/// Faces as `[a, b, c]`.
pub fn format_faces(faces: &[u32]) -> String {
    let joined = faces
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Parse an ability for clap, accepting names and abbreviations.
pub fn parse_ability(value: &str) -> Result<rules_core::Ability, String> {
    value
        .parse()
        .map_err(|_| format!("unknown ability '{value}' (try strength or str)"))
}
