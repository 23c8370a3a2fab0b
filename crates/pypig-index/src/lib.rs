//! Package listing and actions for a private Python package index.
//!
//! Scrapes the index's `/packages` directory listing, parses each filename
//! into a [`PackageRecord`], filters records with a [`PackageFilter`] and
//! dispatches downloads (`pip download`) or removals.
//!
//! # Example
//!
//! ```ignore
//! use pypig_index::{IndexClient, IndexUrl, ListingSource, PackageFilter, parse_listing};
//! use std::time::Duration;
//!
//! let url = IndexUrl::compose("https://pypi.example.com/", "user", "secret")?;
//! let client = IndexClient::new(&url, Duration::from_secs(60));
//! let listing = parse_listing(&client.fetch_listing()?);
//! let filter = PackageFilter {
//!     name: Some("pytket".into()),
//!     ..Default::default()
//! };
//! for pkg in filter.apply(listing.packages) {
//!     println!("{}", pkg);
//! }
//! ```

pub mod client;
mod error;
pub mod filter;
pub mod listing;
pub mod pip;
pub mod record;
pub mod report;
pub mod url;

pub use client::{IndexClient, RemoveResponse};
pub use error::IndexError;
pub use filter::{PackageFilter, VersionRange, cpython_tag};
pub use listing::{Listing, ListingSource, LocalListing, extract_filenames, parse_listing};
pub use pip::PipDownload;
pub use record::{PackageKind, PackageRecord};
pub use report::PackageReport;
pub use url::{IndexUrl, UrlError};
