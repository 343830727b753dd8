use super::models::Config;
use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_ENV_VAR: &str = "PAIDSWEEP_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "paidsweep.ini";
const ENV_PREFIX: &str = "PAIDSWEEP";
const ENV_SEPARATOR: &str = "__";

/// On-disk layout: every setting lives in a `[config]` section
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    config: Config,
}

/// Resolve which file to read: explicit path, then `PAIDSWEEP_CONFIG`,
/// then `paidsweep.ini` in the working directory.
pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Pull variables from a `.env` file into the process environment.
///
/// Runs before the config path is resolved so `.env` may set
/// `PAIDSWEEP_CONFIG` too.
pub fn load_dotenv() {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
}

/// Load configuration from a specific file plus environment overrides.
///
/// Priority (highest last): struct defaults, the INI/TOML file, then
/// `PAIDSWEEP__CONFIG__*` environment variables.
pub fn load_from_sources(config_path: PathBuf) -> Result<Config, ConfigError> {
    // PAIDSWEEP__CONFIG__IGNORE_DAYS -> config.ignore_days
    let settings = config::Config::builder()
        .add_source(File::from(config_path).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;

    let file: ConfigFile = settings.try_deserialize()?;
    Ok(file.config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::humanize::Days;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        assert!(load_from_sources(config_path).is_err());
    }

    #[test]
    fn test_load_from_ini() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("paidsweep.ini");

        let ini_content = r#"
[config]
debug = true
ignore_days = 30
ready_path = /srv/invoices/ready
opus_list = /srv/opus/open-items.csv
paid_path = /srv/invoices/paid
"#;

        fs::write(&config_path, ini_content).unwrap();

        let config = load_from_sources(config_path).unwrap();
        assert!(config.debug);
        assert_eq!(config.ignore_days, Days(30));
        assert_eq!(config.ready_path, Some(PathBuf::from("/srv/invoices/ready")));
        assert_eq!(config.opus_list, Some(PathBuf::from("/srv/opus/open-items.csv")));
        assert_eq!(config.opus_path, None);
        assert_eq!(config.paid_path, Some(PathBuf::from("/srv/invoices/paid")));
        assert!(config.abort_on_move_error);
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("paidsweep.toml");

        let toml_content = r#"
[config]
ignore_days = "4w"
ready_path = "ready"
opus_path = "exports"
paid_path = "paid"
abort_on_move_error = false
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = load_from_sources(config_path).unwrap();
        assert!(!config.debug);
        assert_eq!(config.ignore_days, Days(28));
        assert_eq!(config.opus_path, Some(PathBuf::from("exports")));
        assert!(!config.abort_on_move_error);
    }

    #[test]
    fn test_empty_section_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("empty.ini");

        fs::write(&config_path, "[other]\nkey = value\n").unwrap();

        let config = load_from_sources(config_path).unwrap();
        assert_eq!(config.ignore_days, Days(0));
        assert!(config.ready_path.is_none());
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let explicit = Path::new("/etc/paidsweep/site.ini");
        assert_eq!(resolve_path(Some(explicit)), PathBuf::from(explicit));
    }

    // Environment overrides are not exercised here; set_var is unsafe on edition 2024
}
