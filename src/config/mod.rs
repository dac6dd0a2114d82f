use crate::clerk_error::ClerkError;
use crate::constant::log::ERR_CONFIG_UNREADABLE;
use crate::default_config::CONFIG_FILE_NAME;
use dirs::home_dir;
use formatx::formatx;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// # Clerk Config
///
/// Optional defaults for `bcn`, read from `~/.build-clerk.toml`. Never written by `bcn`.
///
/// ```toml
/// backend_url = "http://clerk.example.com:9090"
/// jenkins_url = "http://ci.example.com/"
/// jenkins_username = "bot"
/// jenkins_api_token = "11aa..."
///
/// [headers]
/// X-Clerk-Token = "secret"
/// ```
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct ClerkConfig {
    pub backend_url: Option<String>,
    pub jenkins_url: Option<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub jenkins_username: Option<String>,
    pub jenkins_api_token: Option<String>,
    pub jenkins_pwd: Option<String>,
}

pub fn get_default_config_file_path(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        Some(path.to_path_buf())
    } else if path.is_dir() {
        Some(path.join(CONFIG_FILE_NAME))
    } else {
        None
    }
}

impl ClerkConfig {
    pub fn parse_from_string(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// # get from path
    ///
    /// `path` may be the file itself or its directory, home dir when `None`.
    /// `Ok(None)` when there is no config file.
    pub fn get_from_path(path: Option<&Path>) -> Result<Option<Self>, ClerkError> {
        let dir = match path {
            Some(p) => p.to_path_buf(),
            None => match home_dir() {
                Some(home) => home,
                None => return Ok(None),
            },
        };

        let file = match get_default_config_file_path(&dir) {
            Some(file) if file.is_file() => file,
            _ => return Ok(None),
        };

        let content = std::fs::read_to_string(&file).map_err(|e| {
            ClerkError::Custom(
                formatx!(ERR_CONFIG_UNREADABLE, file.display(), e.to_string()).unwrap_or_default(),
            )
        })?;

        Self::parse_from_string(&content)
            .map(Some)
            .map_err(|e| ClerkError::Config {
                path: file.display().to_string(),
                e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_get_config_not_exist() {
        let path = PathBuf::from("non_existent_path");
        assert_eq!(ClerkConfig::get_from_path(Some(&path)).unwrap(), None);
    }

    #[test]
    fn test_get_config_from_file() {
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"backend_url = "http://clerk:9090"
jenkins_url = "http://ci.example.com"
jenkins_username = "bot"
jenkins_api_token = "token"

[headers]
X-Clerk-Token = "secret"
"#
        )
        .unwrap();

        let config = ClerkConfig::get_from_path(Some(temp_file.path()))
            .unwrap()
            .unwrap();

        assert_eq!(config.backend_url.as_deref(), Some("http://clerk:9090"));
        assert_eq!(config.jenkins_url.as_deref(), Some("http://ci.example.com"));
        assert_eq!(config.jenkins_username.as_deref(), Some("bot"));
        assert_eq!(config.jenkins_api_token.as_deref(), Some("token"));
        assert_eq!(config.jenkins_pwd, None);
        assert_eq!(
            config.headers.get("X-Clerk-Token").map(String::as_str),
            Some("secret")
        );
    }

    #[test]
    fn test_get_config_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "backend_url = \"http://clerk\"\n",
        )
        .unwrap();

        let config = ClerkConfig::get_from_path(Some(dir.path()))
            .unwrap()
            .unwrap();
        assert_eq!(config.backend_url.as_deref(), Some("http://clerk"));
        assert!(config.headers.is_empty());
    }

    #[test]
    fn test_get_config_unreadable() {
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = ClerkConfig::get_from_path(Some(temp_file.path())).unwrap_err();
        assert!(matches!(err, ClerkError::Custom(_)));
        assert!(err.to_string().starts_with("Cannot read config file"));
    }

    #[test]
    fn test_get_config_invalid() {
        let mut temp_file = tempfile::NamedTempFile::new().unwrap();
        write!(temp_file, "backend_url = [").unwrap();

        let err = ClerkConfig::get_from_path(Some(temp_file.path())).unwrap_err();
        assert!(matches!(err, ClerkError::Config { .. }));
    }
}
