//! Credentials loading.
//!
//! The API key/secret and the default user email live in a JSON object at
//! `~/.zoomctl_credentials.json` with the keys `API_KEY`, `API_SECRET` and
//! `USER_EMAIL`. A missing file or missing key is fatal before any command
//! dispatch happens. `ZOOMCTL_CREDENTIALS` overrides the path.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Result, ZoomctlError};

pub const CREDENTIALS_FILE: &str = ".zoomctl_credentials.json";
pub const CREDENTIALS_ENV: &str = "ZOOMCTL_CREDENTIALS";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub user_email: String,
}

/// Resolve the credentials file location: env override first, then the
/// fixed home-directory path.
pub fn credentials_path() -> Result<PathBuf> {
    if let Ok(p) = env::var(CREDENTIALS_ENV) {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let base = BaseDirs::new().ok_or_else(|| {
        ZoomctlError::CredentialsInvalid("could not determine home directory".into())
    })?;
    Ok(base.home_dir().join(CREDENTIALS_FILE))
}

pub fn load() -> Result<Credentials> {
    load_from(&credentials_path()?)
}

/// Parse the credentials file, reporting the first missing required key by
/// name rather than surfacing a raw serde message.
pub fn load_from(path: &Path) -> Result<Credentials> {
    if !path.is_file() {
        return Err(ZoomctlError::CredentialsMissing(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|e| ZoomctlError::CredentialsInvalid(e.to_string()))?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| ZoomctlError::CredentialsInvalid(e.to_string()))?;

    let field = |key: &'static str| -> Result<String> {
        value
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(ZoomctlError::CredentialsKey(key))
    };

    Ok(Credentials {
        api_key: field("API_KEY")?,
        api_secret: field("API_SECRET")?,
        user_email: field("USER_EMAIL")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_complete_file() {
        let path = write_temp(
            "zoomctl_creds_ok.json",
            r#"{"API_KEY":"k","API_SECRET":"s","USER_EMAIL":"me@example.com"}"#,
        );
        let c = load_from(&path).unwrap();
        assert_eq!(c.api_key, "k");
        assert_eq!(c.api_secret, "s");
        assert_eq!(c.user_email, "me@example.com");
    }

    #[test]
    fn missing_key_is_named() {
        let path = write_temp(
            "zoomctl_creds_nokey.json",
            r#"{"API_KEY":"k","USER_EMAIL":"me@example.com"}"#,
        );
        let err = load_from(&path).unwrap_err();
        assert_eq!(err.to_string(), "'API_SECRET' not found in credentials file");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = env::temp_dir().join("zoomctl_creds_does_not_exist.json");
        let err = load_from(&path).unwrap_err();
        assert!(err.to_string().contains("no credentials file found"));
    }

    #[test]
    fn garbage_is_invalid() {
        let path = write_temp("zoomctl_creds_garbage.json", "not json at all");
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ZoomctlError::CredentialsInvalid(_)));
    }
}
