//! Errors returned when resolving or checking registry links.

/// Errors that can occur while resolving or checking a site link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("Unknown link '{0}' (expected one of: github, docs, site, twitter, email)")]
    UnknownLink(String),

    #[error("Link {name} is not a valid URL: {reason}")]
    InvalidUrl { name: &'static str, reason: String },

    #[error("Link {name} uses unsupported scheme '{scheme}' (only http and https are allowed)")]
    UnsupportedScheme { name: &'static str, scheme: String },

    #[error("Link {name} has no host")]
    MissingHost { name: &'static str },
}
