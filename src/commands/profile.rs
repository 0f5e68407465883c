use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{Input, Select};
use formation_calendar_core::BusinessProfile;
use formation_calendar_core::config::CalendarConfig;
use formation_calendar_core::export::{self, FileSink, PROFILE_FILENAME};
use formation_calendar_core::profile::{US_STATES, parse_formation_date};
use formation_calendar_core::store::ProfileStore;
use owo_colors::OwoColorize;

use crate::render::Render;

const ENTITY_TYPES: [&str; 5] = ["LLC", "S-Corp", "C-Corp", "Sole-Proprietorship", "Partnership"];

pub fn show(store: &ProfileStore, json: bool) -> Result<()> {
    let profile = store.load_or_default()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        println!("{}", profile.render());
    }

    Ok(())
}

/// Merge `updates` into the saved profile
pub fn set(store: &ProfileStore, updates: &BusinessProfile) -> Result<()> {
    if updates.is_empty() {
        anyhow::bail!(
            "Nothing to set.\n\n\
            Example:\n  \
            formation-calendar profile set --state Delaware --formation-date 2024-03-10"
        );
    }

    let profile = store.load_or_default()?.merged_with(updates);
    store.save(&profile)?;

    println!("{}", profile.render());
    println!();
    println!("{}", format!("Saved to {}", store.path().display()).green());

    Ok(())
}

pub fn init(store: &ProfileStore) -> Result<()> {
    let current = store.load_or_default()?;

    let business_name = prompt_optional("  Business name", current.business_name.as_deref())?;

    let entity_index = Select::new()
        .with_prompt("  Entity type")
        .items(&ENTITY_TYPES)
        .default(default_index(&ENTITY_TYPES, current.entity_type.as_deref()))
        .interact()?;

    let state_index = Select::new()
        .with_prompt("  State of formation")
        .items(&US_STATES)
        .default(default_index(&US_STATES, current.state_name()))
        .interact()?;

    let industry = prompt_optional("  Industry", current.industry.as_deref())?;

    let formation_date = loop {
        let default = current
            .formation_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        let input: String = Input::new()
            .with_prompt("  Formation filing date, YYYY-MM-DD (skip)")
            .default(default)
            .show_default(current.formation_date.is_some())
            .interact_text()?;

        if input.trim().is_empty() {
            break None;
        }
        match parse_formation_date(&input) {
            Ok(date) => break Some(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    };

    let profile = BusinessProfile {
        business_name,
        entity_type: Some(ENTITY_TYPES[entity_index].to_string()),
        industry,
        state: Some(US_STATES[state_index].to_string()),
        formation_date,
    };
    store.save(&profile)?;

    println!();
    println!("{}", format!("Saved to {}", store.path().display()).green());

    Ok(())
}

pub fn clear(store: &ProfileStore) -> Result<()> {
    if store.clear()? {
        println!("Removed {}", store.path().display());
    } else {
        println!("{}", "No saved profile".dimmed());
    }
    Ok(())
}

/// Write the saved profile as business-data.json
pub fn export(
    config: &CalendarConfig,
    store: &ProfileStore,
    output: Option<PathBuf>,
) -> Result<()> {
    let profile = store.load()?.context(
        "No saved profile to export.\n\nCreate one with:\n  formation-calendar profile init",
    )?;

    let mut sink = FileSink::new(output.unwrap_or_else(|| config.output_path()));
    let path = sink.path_for(PROFILE_FILENAME);

    export::export_profile(&profile, PROFILE_FILENAME, &mut sink)
        .with_context(|| format!("Failed to export profile to {}", path.display()))?;

    println!("{}", format!("Exported profile to {}", path.display()).green());
    Ok(())
}

fn prompt_optional(prompt: &str, current: Option<&str>) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(format!("{} (skip)", prompt))
        .default(current.unwrap_or_default().to_string())
        .show_default(current.is_some())
        .interact_text()?;

    let input = input.trim();
    Ok((!input.is_empty()).then(|| input.to_string()))
}

fn default_index(options: &[&str], current: Option<&str>) -> usize {
    current
        .and_then(|c| options.iter().position(|o| o.eq_ignore_ascii_case(c)))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_merges_into_saved_profile() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path().join("profile.toml"));

        let first = BusinessProfile {
            business_name: Some("Acme".to_string()),
            ..Default::default()
        };
        set(&store, &first).unwrap();

        let second = BusinessProfile::new(Some("Delaware"), Some("2024-03-10")).unwrap();
        set(&store, &second).unwrap();

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.business_name.as_deref(), Some("Acme"));
        assert_eq!(saved.state_name(), Some("Delaware"));
    }

    #[test]
    fn test_set_without_fields_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path().join("profile.toml"));
        assert!(set(&store, &BusinessProfile::default()).is_err());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_export_without_profile_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path().join("profile.toml"));
        let err = export(&CalendarConfig::default(), &store, Some(tmp.path().to_path_buf()))
            .unwrap_err();
        assert!(err.to_string().contains("No saved profile"));
    }

    #[test]
    fn test_export_writes_business_data_json() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path().join("profile.toml"));
        store
            .save(&BusinessProfile::new(Some("Delaware"), Some("2024-03-10")).unwrap())
            .unwrap();

        let out = tmp.path().join("out");
        export(&CalendarConfig::default(), &store, Some(out.clone())).unwrap();

        let json = std::fs::read_to_string(out.join("business-data.json")).unwrap();
        assert!(json.contains("\"state\": \"Delaware\""), "Got:\n{}", json);
    }

    #[test]
    fn test_default_index_matches_case_insensitively() {
        assert_eq!(default_index(&US_STATES, Some("delaware")), 7);
        assert_eq!(default_index(&ENTITY_TYPES, Some("Unknown")), 0);
        assert_eq!(default_index(&ENTITY_TYPES, None), 0);
    }
}
