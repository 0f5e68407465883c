use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use formation_calendar_core::config::CalendarConfig;
use formation_calendar_core::export::{self, FileSink, WriterSink};
use formation_calendar_core::{BusinessProfile, derive};
use owo_colors::OwoColorize;

/// Where the exported calendar goes
#[derive(Debug, Default)]
pub struct Target {
    pub output: Option<PathBuf>,
    pub filename: Option<String>,
    pub stdout: bool,
    pub open: bool,
}

pub fn run(config: &CalendarConfig, profile: &BusinessProfile, target: Target) -> Result<()> {
    let events = derive(profile);

    let mut options = config.export_options();
    options.stamp = Some(Utc::now());

    let filename = target.filename.unwrap_or_else(|| config.filename.clone());

    if target.stdout {
        let mut sink = WriterSink::new(std::io::stdout().lock());
        export::export(&events, &filename, &options, &mut sink)
            .context("Failed to write calendar to stdout")?;
        return Ok(());
    }

    let dir = target.output.unwrap_or_else(|| config.output_path());
    let mut sink = FileSink::new(dir);
    let path = sink.path_for(&filename);

    export::export(&events, &filename, &options, &mut sink)
        .with_context(|| format!("Failed to export calendar to {}", path.display()))?;

    println!(
        "{}",
        format!("Exported {} events to {}", events.len(), path.display()).green()
    );

    if target.open {
        open::that(&path).with_context(|| format!("Could not open {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_named_file() {
        let tmp = tempfile::tempdir().unwrap();
        let profile = BusinessProfile::new(Some("Delaware"), Some("2024-03-10")).unwrap();
        let target = Target {
            output: Some(tmp.path().to_path_buf()),
            filename: Some("acme.ics".to_string()),
            ..Default::default()
        };

        run(&CalendarConfig::default(), &profile, target).unwrap();

        let content = std::fs::read_to_string(tmp.path().join("acme.ics")).unwrap();
        assert!(content.contains("Delaware Annual Report/Franchise Tax"));
        assert!(content.contains("DTSTAMP:"), "CLI exports carry a DTSTAMP");
    }

    #[test]
    fn test_export_failure_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let target = Target {
            output: Some(blocker),
            ..Default::default()
        };
        let err = run(&CalendarConfig::default(), &BusinessProfile::default(), target).unwrap_err();
        assert!(err.to_string().contains("Failed to export calendar"), "Got: {}", err);
    }
}
