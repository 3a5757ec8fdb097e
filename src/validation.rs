//! Sanity checks for registry links.
//!
//! Every link must be an absolute HTTP(S) URL with a host so it can be
//! rendered as-is in an anchor tag.

use crate::error::LinkError;
use crate::links::SiteLink;
use url::Url;

/// Outcome of checking a single registry entry.
#[derive(Debug, Clone)]
pub struct LinkCheck {
    pub link: SiteLink,
    pub result: Result<Url, LinkError>,
}

impl LinkCheck {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Parses a registry link and verifies it is an absolute HTTP(S) URL.
///
/// # Errors
///
/// Returns [`LinkError::InvalidUrl`] for malformed values,
/// [`LinkError::UnsupportedScheme`] for non-HTTP(S) schemes and
/// [`LinkError::MissingHost`] when the URL has no host.
pub fn check_link(link: SiteLink) -> Result<Url, LinkError> {
    check_url(link.constant_name(), link.url())
}

/// Checks every registry entry, in display order.
pub fn check_registry() -> Vec<LinkCheck> {
    let checks: Vec<LinkCheck> = SiteLink::ALL
        .into_iter()
        .map(|link| LinkCheck {
            link,
            result: check_link(link),
        })
        .collect();

    let failed = checks.iter().filter(|c| !c.is_ok()).count();
    if failed == 0 {
        tracing::debug!(total = checks.len(), "All site links are valid");
    }

    checks
}

fn check_url(name: &'static str, raw: &str) -> Result<Url, LinkError> {
    let url = Url::parse(raw).map_err(|e| {
        tracing::warn!(link = name, error = %e, "Failed to parse site link");
        LinkError::InvalidUrl {
            name,
            reason: e.to_string(),
        }
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            tracing::warn!(link = name, scheme = other, "Site link has unsupported scheme");
            return Err(LinkError::UnsupportedScheme {
                name,
                scheme: other.to_string(),
            });
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        tracing::warn!(link = name, "Site link has no host");
        return Err(LinkError::MissingHost { name });
    }

    Ok(url)
}
