//! `pypig list`

use super::{NO_PACKAGES_MESSAGE, filtered_packages};
use crate::error::{CliError, Outcome};
use pypig_index::{ListingSource, PackageFilter, PackageReport};
use pypig_output::{OutputFormat, OutputFormatter};

pub fn cmd_list(
    source: &dyn ListingSource,
    filter: &PackageFilter,
    format: &OutputFormat,
) -> Result<Outcome, CliError> {
    let report = PackageReport::new(filtered_packages(source, filter)?);
    if report.is_empty() {
        println!("{}", NO_PACKAGES_MESSAGE);
        return Ok(Outcome::NoPackages);
    }
    report.print(format).map_err(CliError::Output)?;
    Ok(Outcome::Success)
}
