//! `pypig download`

use super::{NO_PACKAGES_MESSAGE, filtered_packages};
use crate::error::{CliError, Outcome};
use pypig_index::{ListingSource, PackageFilter, PipDownload};

/// Download every matching package in listing order, stopping at the first failure.
pub fn cmd_download(
    source: &dyn ListingSource,
    filter: &PackageFilter,
    pip: &PipDownload,
) -> Result<Outcome, CliError> {
    let packages = filtered_packages(source, filter)?;
    if packages.is_empty() {
        println!("{}", NO_PACKAGES_MESSAGE);
        return Ok(Outcome::NoPackages);
    }

    for package in &packages {
        println!("Downloading package {}", package);
        println!("{}", pip.display_command(package));
        pip.run(package)?;
    }
    Ok(Outcome::Success)
}
