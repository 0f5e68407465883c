//! User configuration at ~/.config/formation-calendar/config.toml

use std::path::{Path, PathBuf};

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::export::CALENDAR_FILENAME;
use crate::ics::ExportOptions;
use crate::store::ProfileStore;

static CONFIG_DIR_NAME: &str = "formation-calendar";
static DEFAULT_OUTPUT_DIR: &str = ".";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_filename() -> String {
    CALENDAR_FILENAME.to_string()
}

fn default_calendar_name() -> String {
    ExportOptions::default().calendar_name
}

fn default_product_id() -> String {
    ExportOptions::default().product_id
}

fn default_uid_domain() -> String {
    ExportOptions::default().uid_domain
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalendarConfig {
    /// Where exported files are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_filename")]
    pub filename: String,

    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,

    #[serde(default = "default_product_id")]
    pub product_id: String,

    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,

    /// Saved profile location, defaults to profile.toml next to this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<PathBuf>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            output_dir: default_output_dir(),
            filename: default_filename(),
            calendar_name: default_calendar_name(),
            product_id: default_product_id(),
            uid_domain: default_uid_domain(),
            profile_path: None,
        }
    }
}

impl CalendarConfig {
    pub fn config_dir() -> CalendarResult<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> CalendarResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first use.
    pub fn load() -> CalendarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        let config: CalendarConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Values written into single .ics content lines can't contain line breaks
    fn validate(&self) -> CalendarResult<()> {
        let single_line = [
            ("calendar_name", &self.calendar_name),
            ("product_id", &self.product_id),
            ("uid_domain", &self.uid_domain),
        ];

        for (key, value) in single_line {
            if value.contains(['\r', '\n']) {
                let msg = format!("'{key}' must not contain line breaks");
                return Err(CalendarError::Config(msg));
            }
        }

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let defaults = CalendarConfig::default();
        let contents = format!(
            "\
# formation-calendar configuration

# Where exported files are written:
# output_dir = \"{}\"

# Name of the exported calendar file:
# filename = \"{}\"

# Calendar name shown by calendar apps:
# calendar_name = \"{}\"

# Product identifier and UID domain used in the .ics file:
# product_id = \"{}\"
# uid_domain = \"{}\"

# Where `profile set` saves your business profile:
# profile_path = \"~/.config/{}/profile.toml\"
",
            DEFAULT_OUTPUT_DIR,
            defaults.filename,
            defaults.calendar_name,
            defaults.product_id,
            defaults.uid_domain,
            CONFIG_DIR_NAME,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Output directory with `~` expanded
    pub fn output_path(&self) -> PathBuf {
        expand(&self.output_dir)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            product_id: self.product_id.clone(),
            calendar_name: self.calendar_name.clone(),
            uid_domain: self.uid_domain.clone(),
            stamp: None,
        }
    }

    pub fn profile_store(&self) -> CalendarResult<ProfileStore> {
        let path = match &self.profile_path {
            Some(p) => expand(p),
            None => Self::config_dir()?.join("profile.toml"),
        };
        Ok(ProfileStore::new(path))
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = CalendarConfig::load_from(&tmp.path().join("missing.toml")).unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert_eq!(config.filename, "business-compliance-calendar.ics");
        assert_eq!(config.export_options(), ExportOptions::default());
    }

    #[test]
    fn test_commented_default_file_parses_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        CalendarConfig::create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = CalendarConfig::load_from(&path).unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "output_dir = \"~/exports\"\ncalendar_name = \"Acme Deadlines\"\nprofile_path = \"/tmp/acme.toml\"\n",
        )
        .unwrap();

        let config = CalendarConfig::load_from(&path).unwrap();
        assert_eq!(config.calendar_name, "Acme Deadlines");
        assert_eq!(config.export_options().calendar_name, "Acme Deadlines");
        assert_eq!(config.filename, CALENDAR_FILENAME);
        assert!(!config.output_path().to_string_lossy().starts_with('~'));
        assert_eq!(
            config.profile_store().unwrap().path(),
            Path::new("/tmp/acme.toml")
        );
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "filename = [1, 2]\n").unwrap();

        let err = CalendarConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)), "Got {:?}", err);
    }

    #[test]
    fn test_line_break_in_product_id_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "product_id = \"-//Acme//EN\\r\\nX-INJECTED:yes\"\n").unwrap();

        let err = CalendarConfig::load_from(&path).unwrap_err();
        assert!(
            matches!(err, CalendarError::Config(ref msg) if msg.contains("product_id")),
            "Unexpected error: {:?}",
            err
        );
    }
}
