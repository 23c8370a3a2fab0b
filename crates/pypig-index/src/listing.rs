//! Directory-listing scraping.
//!
//! The index serves a line-oriented HTML page where each package file is a
//! line like `<a href="...">pytket-0.5.3.tar.gz</a><br>`.

use crate::{IndexError, PackageRecord};
use std::path::PathBuf;

/// Something that yields the raw listing text.
pub trait ListingSource {
    fn fetch_listing(&self) -> Result<String, IndexError>;
}

/// A listing saved to a local file.
#[derive(Debug, Clone)]
pub struct LocalListing {
    path: PathBuf,
}

impl LocalListing {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for LocalListing {
    fn fetch_listing(&self) -> Result<String, IndexError> {
        tracing::debug!(path = %self.path.display(), "reading local listing");
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// Extract the link text of every `<a href` line, in listing order.
pub fn extract_filenames(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("<a href"))
        .map(|line| {
            let text = line.split_once('>').map_or(line, |(_, rest)| rest);
            text.split_once('<').map_or(text, |(name, _)| name)
        })
}

/// Records parsed from a listing.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    /// Parsed records in listing order.
    pub packages: Vec<PackageRecord>,
    /// Filenames with a package extension that failed to parse.
    pub skipped: Vec<String>,
}

/// Parse every recognized package file in a listing.
///
/// Files with other extensions are ignored. Malformed package filenames are
/// logged and recorded in [`Listing::skipped`]; they never abort the listing.
pub fn parse_listing(text: &str) -> Listing {
    let mut listing = Listing::default();
    for filename in extract_filenames(text) {
        match PackageRecord::from_filename(filename) {
            Some(Ok(record)) => listing.packages.push(record),
            Some(Err(err)) => {
                tracing::warn!("skipping listing entry: {}", err);
                listing.skipped.push(filename.to_string());
            }
            None => {}
        }
    }
    tracing::debug!(
        packages = listing.packages.len(),
        skipped = listing.skipped.len(),
        "parsed listing"
    );
    listing
}
