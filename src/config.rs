// Configuration module for maniclip
// This module handles loading and parsing configuration from ~/.config/maniclip/config.toml

mod types;

pub use types::{ClipboardBackend, Config};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/maniclip/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path (exposed for testing)
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => {
            #[cfg(debug_assertions)]
            log::debug!("Config file read successfully, {} bytes", contents.len());
            contents
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config.clipboard.backend);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/maniclip/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("maniclip")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // For any invalid clipboard backend value in a TOML config file, the config
    // system should fall back to defaults and report a warning.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_invalid_backend_fallback(
            invalid_backend in "[a-z]{3,10}".prop_filter(
                "not valid",
                |s| !["auto", "system", "osc52"].contains(&s.as_str())
            )
        ) {
            let toml_content = format!(r#"
[clipboard]
backend = "{}"
"#, invalid_backend);

            let file = write_temp_config(&toml_content);
            let result = load_config_from(file.path());

            prop_assert!(result.warning.is_some(), "Invalid backend should produce a warning");
            prop_assert_eq!(
                result.config.clipboard.backend,
                ClipboardBackend::Auto,
                "Fallback config should use Auto backend"
            );
        }
    }

    // For any malformed TOML syntax in the config file, the config system should
    // return a config with all default values plus a warning.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_malformed_toml_fallback(
            malformed in prop::sample::select(vec![
                "[clipboard\nbackend = \"auto\"",      // Missing closing bracket
                "[clipboard]\nbackend = auto",          // Missing quotes
                "[clipboard]\n backend",                // Missing value
                "clipboard]\nbackend = \"auto\"",       // Missing opening bracket
                "[clipboard]\nbackend = \"auto",        // Unterminated string
                "[clipboard\nbackend = \"auto\"\n]",    // Bracket in wrong place
            ])
        ) {
            let file = write_temp_config(malformed);
            let result = load_config_from(file.path());

            prop_assert!(result.warning.is_some(), "Malformed TOML should produce a warning");
            prop_assert_eq!(
                result.config.clipboard.backend,
                ClipboardBackend::Auto,
                "Fallback config should use Auto backend"
            );
            prop_assert_eq!(result.config.toast.duration_ms, 3000);
        }
    }

    // For any execution of the config loading function, it should attempt to load
    // from the same standardized path (~/.config/maniclip/config.toml).
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_config_path_consistency(_iteration in 0..10u32) {
            let path1 = get_config_path();
            let path2 = get_config_path();

            prop_assert_eq!(&path1, &path2, "Config path should be consistent");

            let path_str = path1.to_string_lossy();
            prop_assert!(
                path_str.ends_with("maniclip/config.toml") || path_str.ends_with("maniclip\\config.toml"),
                "Config path should end with maniclip/config.toml, got: {}",
                path_str
            );
        }
    }

    #[test]
    fn test_missing_file_returns_defaults_without_warning() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("does-not-exist.toml"));
        assert!(result.warning.is_none());
        assert_eq!(result.config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(result.config.toast.duration_ms, 3000);
    }

    #[test]
    fn test_valid_file_parses_without_warning() {
        let file = write_temp_config(
            r#"
[clipboard]
backend = "osc52"

[toast]
duration_ms = 5000

[manifest]
url = "https://addon.example.org/manifest.json"
"#,
        );
        let result = load_config_from(file.path());
        assert!(result.warning.is_none());
        assert_eq!(result.config.clipboard.backend, ClipboardBackend::Osc52);
        assert_eq!(result.config.toast.duration_ms, 5000);
        assert_eq!(
            result.config.manifest.url.as_deref(),
            Some("https://addon.example.org/manifest.json")
        );
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(config.toast.duration_ms, 3000);
        assert!(config.manifest.url.is_none());
    }

    #[test]
    fn test_clipboard_backend_default() {
        let backend = ClipboardBackend::default();
        assert_eq!(backend, ClipboardBackend::Auto);
    }
}
