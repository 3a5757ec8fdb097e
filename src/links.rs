//! Public StreamPark links shown in the console footer and about page.
//!
//! The exported constants are the stable contract. [`SiteLink`] wraps the same
//! values so callers can iterate the registry, resolve a link by name, or
//! serialize it.

use crate::error::LinkError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Apache StreamPark source repository on GitHub.
pub const GITHUB_URL: &str = "https://github.com/apache/streampark";

/// Getting-started page of the documentation.
pub const DOC_URL: &str = "https://streampark.apache.org/docs/get-started/introduction";

/// Project home page.
pub const SITE_URL: &str = "https://streampark.apache.org";

/// Project account on X (formerly Twitter).
pub const TWITTER_URL: &str = "https://x.com/ASFStreampark";

/// Archive of the `dev@streampark.apache.org` mailing list.
pub const EMAIL_URL: &str = "https://lists.apache.org/list.html?dev@streampark.apache.org";

/// One entry of the site link registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteLink {
    Github,
    Docs,
    Site,
    Twitter,
    Email,
}

impl SiteLink {
    /// Every registry entry, in display order.
    pub const ALL: [SiteLink; 5] = [
        SiteLink::Github,
        SiteLink::Docs,
        SiteLink::Site,
        SiteLink::Twitter,
        SiteLink::Email,
    ];

    /// URL of this link, identical to its exported constant.
    pub const fn url(self) -> &'static str {
        match self {
            SiteLink::Github => GITHUB_URL,
            SiteLink::Docs => DOC_URL,
            SiteLink::Site => SITE_URL,
            SiteLink::Twitter => TWITTER_URL,
            SiteLink::Email => EMAIL_URL,
        }
    }

    /// Short lowercase name, e.g. `github`.
    pub const fn name(self) -> &'static str {
        match self {
            SiteLink::Github => "github",
            SiteLink::Docs => "docs",
            SiteLink::Site => "site",
            SiteLink::Twitter => "twitter",
            SiteLink::Email => "email",
        }
    }

    /// Name of the exported constant holding this link, e.g. `GITHUB_URL`.
    pub const fn constant_name(self) -> &'static str {
        match self {
            SiteLink::Github => "GITHUB_URL",
            SiteLink::Docs => "DOC_URL",
            SiteLink::Site => "SITE_URL",
            SiteLink::Twitter => "TWITTER_URL",
            SiteLink::Email => "EMAIL_URL",
        }
    }

    /// Serializable view of this link, as printed by `site-links list --format json`.
    pub fn entry(self) -> LinkEntry {
        LinkEntry {
            name: self.name(),
            constant: self.constant_name(),
            url: self.url(),
        }
    }
}

impl fmt::Display for SiteLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}

impl FromStr for SiteLink {
    type Err = LinkError;

    /// Accepts either the short name or the constant name, ignoring ASCII case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();

        SiteLink::ALL
            .into_iter()
            .find(|link| {
                link.name().eq_ignore_ascii_case(needle)
                    || link.constant_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| LinkError::UnknownLink(needle.to_string()))
    }
}

/// Serializable view of a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub name: &'static str,
    pub constant: &'static str,
    pub url: &'static str,
}

/// Iterates over the whole registry in display order.
pub fn entries() -> impl Iterator<Item = LinkEntry> {
    SiteLink::ALL.into_iter().map(SiteLink::entry)
}

/// Resolves a short or constant name to its URL.
///
/// # Errors
///
/// Returns [`LinkError::UnknownLink`] if no entry matches `name`.
pub fn lookup(name: &str) -> Result<&'static str, LinkError> {
    name.parse::<SiteLink>().map(SiteLink::url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_constants_match_enum() {
        assert_eq!(SiteLink::Github.url(), GITHUB_URL);
        assert_eq!(SiteLink::Docs.url(), DOC_URL);
        assert_eq!(SiteLink::Site.url(), SITE_URL);
        assert_eq!(SiteLink::Twitter.url(), TWITTER_URL);
        assert_eq!(SiteLink::Email.url(), EMAIL_URL);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = SiteLink::ALL.iter().map(|l| l.name()).collect();
        let constants: HashSet<_> = SiteLink::ALL.iter().map(|l| l.constant_name()).collect();

        assert_eq!(names.len(), SiteLink::ALL.len());
        assert_eq!(constants.len(), SiteLink::ALL.len());
    }

    #[test]
    fn test_parse_short_name() {
        assert_eq!("github".parse::<SiteLink>().unwrap(), SiteLink::Github);
        assert_eq!("docs".parse::<SiteLink>().unwrap(), SiteLink::Docs);
        assert_eq!("email".parse::<SiteLink>().unwrap(), SiteLink::Email);
    }

    #[test]
    fn test_parse_constant_name_case_insensitive() {
        assert_eq!("SITE_URL".parse::<SiteLink>().unwrap(), SiteLink::Site);
        assert_eq!("twitter_url".parse::<SiteLink>().unwrap(), SiteLink::Twitter);
        assert_eq!("  Docs \n".parse::<SiteLink>().unwrap(), SiteLink::Docs);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "mastodon".parse::<SiteLink>().unwrap_err();
        assert!(matches!(err, LinkError::UnknownLink(ref n) if n == "mastodon"));

        assert!("".parse::<SiteLink>().is_err());
        assert!("URL".parse::<SiteLink>().is_err());
    }

    #[test]
    fn test_display_writes_url() {
        assert_eq!(SiteLink::Site.to_string(), "https://streampark.apache.org");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("site").unwrap(), SITE_URL);
        assert_eq!(lookup("EMAIL_URL").unwrap(), EMAIL_URL);
        assert!(lookup("wiki").is_err());
    }

    #[test]
    fn test_entry_serialization() {
        let json = serde_json::to_value(SiteLink::Github.entry()).unwrap();

        assert_eq!(json["name"], "github");
        assert_eq!(json["constant"], "GITHUB_URL");
        assert_eq!(json["url"], "https://github.com/apache/streampark");
    }

    #[test]
    fn test_site_link_serializes_as_short_name() {
        assert_eq!(
            serde_json::to_string(&SiteLink::Twitter).unwrap(),
            "\"twitter\""
        );
    }
}
