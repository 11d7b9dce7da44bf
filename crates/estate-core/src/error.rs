//! Error Types

use thiserror::Error;

/// Failure to read one of the embedded JSON manifests
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse {manifest} manifest: {source}")]
    Parse {
        manifest: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Contact form validation problems, one per offending field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please tell us your name")]
    MissingName,
    #[error("Please leave a phone number or an email address")]
    MissingContactRoute,
    #[error("Phone number should have 10 to 15 digits")]
    InvalidPhone,
    #[error("Email address looks incomplete")]
    InvalidEmail,
    #[error("Please write a short message")]
    MissingMessage,
}
