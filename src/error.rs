//! Error taxonomy for zoomctl.
//!
//! Four families: credentials problems, lookups that match nothing, invalid
//! license states (unlicensed source, ambiguous source), and remote failures.
//! Every variant is terminal for the process; `main` prints it once with an
//! `ERROR:` prefix and exits 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for zoomctl operations.
pub type Result<T> = std::result::Result<T, ZoomctlError>;

#[derive(Error, Debug)]
pub enum ZoomctlError {
    #[error("no credentials file found at '{}'", .0.display())]
    CredentialsMissing(PathBuf),

    #[error("'{0}' not found in credentials file")]
    CredentialsKey(&'static str),

    #[error("invalid credentials file: {0}")]
    CredentialsInvalid(String),

    #[error("user '{0}' not found")]
    UserNotFound(String),

    #[error("user '{0}' does not have a license")]
    SourceNotLicensed(String),

    #[error("no license found - please purchase a Zoom license first")]
    NoLicenseAvailable,

    #[error("found multiple licenses - you need to specify which one using `--from`")]
    AmbiguousSource,

    /// Remote call completed but returned an unexpected status.
    #[error("{context} (HTTP {status})")]
    RemoteStatus { context: String, status: u16 },

    #[error("failed to sign API token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// Transport-level failure (connect, TLS, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_status_message_includes_context_and_code() {
        let e = ZoomctlError::RemoteStatus {
            context: "could not retrieve user list".into(),
            status: 401,
        };
        assert_eq!(e.to_string(), "could not retrieve user list (HTTP 401)");
    }

    #[test]
    fn ambiguous_source_mentions_from_flag() {
        assert!(ZoomctlError::AmbiguousSource.to_string().contains("--from"));
    }
}
