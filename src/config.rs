//! Configuration constants and profile loading for the job-board console
//!
//! A profile is one section of an INI file:
//!
//! ```ini
//! [default]
//! base_url = http://localhost:5000/api
//! header.X-Request-Source = console
//! ```

use std::path::Path;

use ini::Ini;

use crate::console::services::ApiConfig;

/// Default profile file path
pub const DEFAULT_PROFILE_PATH: &str = "~/.jobboard/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "JOBBOARD_PROFILE_PATH";

/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "JOBBOARD_LOG_LEVEL";

const BASE_URL_KEY: &str = "base_url";
const HEADER_KEY_PREFIX: &str = "header.";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Load the named profile as an [`ApiConfig`].
///
/// Returns `Ok(None)` when the file or the section does not exist. A
/// section without `base_url` falls back to the built-in base URL.
pub fn load_profile(path: &str, name: &str) -> Result<Option<ApiConfig>, ini::Error> {
    let expanded = shellexpand::tilde(path);
    let path = Path::new(expanded.as_ref());
    if !path.exists() {
        tracing::debug!("Profile file '{}' does not exist", path.display());
        return Ok(None);
    }

    let ini = Ini::load_from_file(path)?;
    let Some(section) = ini.section(Some(name)) else {
        tracing::debug!("Profile '{}' not found in '{}'", name, path.display());
        return Ok(None);
    };

    let mut config = match section.get(BASE_URL_KEY) {
        Some(base_url) => ApiConfig::new(base_url),
        None => ApiConfig::default(),
    };
    for (key, value) in section.iter() {
        if let Some(header) = key.strip_prefix(HEADER_KEY_PREFIX) {
            config = config.with_header(header, value);
        }
    }
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::services::DEFAULT_BASE_URL;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn profile_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_profile_path() {
        assert_eq!(DEFAULT_PROFILE_PATH, "~/.jobboard/profile");
    }

    #[test]
    fn test_get_profile_path_env_override() {
        // Save current env var state
        let original = std::env::var_os(PROFILE_PATH_ENV_VAR);

        let test_path = "/custom/profile/path";
        std::env::set_var(PROFILE_PATH_ENV_VAR, test_path);
        assert_eq!(get_profile_path(), test_path);

        std::env::remove_var(PROFILE_PATH_ENV_VAR);
        assert_eq!(get_profile_path(), DEFAULT_PROFILE_PATH);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(PROFILE_PATH_ENV_VAR, val);
        }
    }

    #[test]
    fn test_load_profile_reads_base_url_and_headers() {
        let file = profile_file(
            "[staging]\nbase_url = http://staging.local/api/\nheader.X-Request-Source = console\n",
        );
        let config = load_profile(file.path().to_str().unwrap(), "staging")
            .unwrap()
            .unwrap();

        assert_eq!(config.base_url(), "http://staging.local/api");
        assert_eq!(
            config.default_headers().get("X-Request-Source"),
            Some(&"console".to_string())
        );
    }

    #[test]
    fn test_load_profile_without_base_url_uses_default() {
        let file = profile_file("[default]\nheader.Authorization = Bearer abc\n");
        let config = load_profile(file.path().to_str().unwrap(), "default")
            .unwrap()
            .unwrap();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.default_headers().len(), 1);
    }

    #[test]
    fn test_load_profile_missing_section_returns_none() {
        let file = profile_file("[default]\nbase_url = http://localhost:5000/api\n");
        let config = load_profile(file.path().to_str().unwrap(), "production").unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_profile_missing_file_returns_none() {
        let config = load_profile("/nonexistent/jobboard/profile", "default").unwrap();
        assert!(config.is_none());
    }
}
