//! Profile YAML input and output.
//!
//! Documents are parsed into a loose raw form first, then converted into a
//! typed [`UserProfile`] with the documented defaults:
//!
//! | field                       | default   | unknown value          |
//! |-----------------------------|-----------|------------------------|
//! | `hours_per_week`            | required  | parse error            |
//! | `capital_eur`               | required  | parse error            |
//! | `language_cefr`             | required  | `Unknown` (exact case) |
//! | `objective_preset`          | required  | rejected               |
//! | `startability_window_weeks` | 4         | parse error            |
//! | `assets`                    | empty     |                        |
//! | `include_tags`              | empty     |                        |
//! | `exclude_tags`              | empty     |                        |
//! | `max_legal_friction`        | `ok`      | `ok`, with a warning   |
//!
//! Objective presets are a closed set, so an unrecognized one is an error
//! rather than a silent "no reordering" fallback.

use crate::profile::{UserProfile, DEFAULT_STARTABILITY_WINDOW_WEEKS};
use crate::schema::{LanguageLevel, LegalGate, ObjectivePreset};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ProfileDocument {
    hours_per_week: Option<u32>,
    capital_eur: Option<u32>,
    language_cefr: Option<String>,
    #[serde(default)]
    assets: Vec<String>,
    objective_preset: Option<String>,
    startability_window_weeks: Option<u32>,
    #[serde(default)]
    include_tags: Vec<String>,
    #[serde(default)]
    exclude_tags: Vec<String>,
    max_legal_friction: Option<String>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| anyhow!("profile is missing required field {field}"))
}

/// Parse a profile from YAML text.
pub fn parse_profile(text: &str) -> Result<UserProfile> {
    let doc: ProfileDocument = serde_yaml::from_str(text).context("parse profile YAML")?;
    let language_raw = required(doc.language_cefr, "language_cefr")?;
    let language_cefr = language_raw
        .trim()
        .parse::<LanguageLevel>()
        .unwrap_or(LanguageLevel::Unknown);
    let objective_raw = required(doc.objective_preset, "objective_preset")?;
    let objective_preset = objective_raw
        .trim()
        .parse::<ObjectivePreset>()
        .context("parse objective_preset")?;
    let max_legal_friction = match doc.max_legal_friction.as_deref().map(str::trim) {
        None | Some("") => LegalGate::Ok,
        Some(raw) => raw.parse::<LegalGate>().unwrap_or_else(|err| {
            tracing::warn!(%err, "treating max_legal_friction as ok");
            LegalGate::Ok
        }),
    };
    Ok(UserProfile {
        hours_per_week: required(doc.hours_per_week, "hours_per_week")?,
        capital_eur: required(doc.capital_eur, "capital_eur")?,
        language_cefr,
        assets: doc.assets,
        objective_preset,
        startability_window_weeks: doc
            .startability_window_weeks
            .unwrap_or(DEFAULT_STARTABILITY_WINDOW_WEEKS),
        include_tags: doc.include_tags,
        exclude_tags: doc.exclude_tags,
        max_legal_friction,
    })
}

/// Load a profile from a YAML file.
pub fn load_profile(path: &Path) -> Result<UserProfile> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read profile {}", path.display()))?;
    parse_profile(&text).with_context(|| format!("load profile {}", path.display()))
}

/// Render a profile as YAML that [`parse_profile`] reads back unchanged.
pub fn render_profile_yaml(profile: &UserProfile) -> Result<String> {
    serde_yaml::to_string(profile).context("serialize profile YAML")
}
