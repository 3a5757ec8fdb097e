//! # StreamPark Site Links
//!
//! The public links of the Apache StreamPark project, for the console's footer
//! and about page.
//!
//! ## Usage
//!
//! ```
//! use streampark_site_links::{SITE_URL, SiteLink};
//!
//! assert_eq!(SITE_URL, "https://streampark.apache.org");
//!
//! for link in SiteLink::ALL {
//!     println!("{}: {}", link.name(), link.url());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`links`] - The named URL constants and the [`SiteLink`] registry
//! - [`validation`] - Checks that every link is an absolute HTTP(S) URL
//! - [`error`] - [`LinkError`] returned by lookups and checks
//! - [`config`] - Logging configuration for the `site-links` binary

pub mod config;
pub mod error;
pub mod links;
pub mod validation;

pub use error::LinkError;
pub use links::{
    DOC_URL, EMAIL_URL, GITHUB_URL, LinkEntry, SITE_URL, SiteLink, TWITTER_URL, entries, lookup,
};

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::error::LinkError;
    pub use crate::links::{LinkEntry, SiteLink};
    pub use crate::validation::{LinkCheck, check_link, check_registry};
}
