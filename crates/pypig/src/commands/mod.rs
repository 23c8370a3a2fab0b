//! Command implementations.

pub mod download;
pub mod list;
pub mod remove;

use pypig_index::{IndexError, ListingSource, PackageFilter, PackageRecord, parse_listing};

/// Printed when the filters match nothing.
pub const NO_PACKAGES_MESSAGE: &str = "No packages found matching filters";

/// Fetch the listing once and keep the records that pass `filter`.
pub fn filtered_packages(
    source: &dyn ListingSource,
    filter: &PackageFilter,
) -> Result<Vec<PackageRecord>, IndexError> {
    let listing = parse_listing(&source.fetch_listing()?);
    let packages: Vec<_> = filter.apply(listing.packages).collect();
    tracing::info!(
        matched = packages.len(),
        skipped = listing.skipped.len(),
        "filtered listing"
    );
    Ok(packages)
}
