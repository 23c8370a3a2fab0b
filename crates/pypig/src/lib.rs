//! pypig: list, download and remove packages on a private pypiserver.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{CliError, ERROR_EXIT, Outcome};

use cli::{Cli, Commands};
use commands::remove::RemoveReport;
use config::Credentials;
use pypig_index::{IndexClient, ListingSource, LocalListing, PackageReport, PipDownload};
use pypig_output::print_output_schema;
use std::time::Duration;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<Outcome, CliError> {
    if cli.output.output_schema {
        return match cli.command {
            Commands::List(_) => {
                print_output_schema::<PackageReport>();
                Ok(Outcome::Success)
            }
            Commands::Remove(_) => {
                print_output_schema::<RemoveReport>();
                Ok(Outcome::Success)
            }
            Commands::Download(_) => Err(CliError::Output(
                "download has no structured output".to_string(),
            )),
        };
    }

    let format = cli.output.format();
    let credentials = cli
        .credentials()
        .resolve(Credentials::default_path().as_deref())?;
    let url = credentials.index_url()?;
    tracing::debug!(index = %url, "resolved index");

    let timeout = Duration::from_secs(cli.timeout);
    let client = IndexClient::new(&url, timeout);
    let local = cli.debug.as_deref().map(LocalListing::new);
    let source: &dyn ListingSource = match &local {
        Some(listing) => listing,
        None => &client,
    };

    match &cli.command {
        Commands::List(args) => commands::list::cmd_list(source, &args.filter(), &format),
        Commands::Download(args) => {
            let pip = PipDownload::new(&args.python_exe, url, &args.dest, timeout);
            commands::download::cmd_download(source, &args.filter.filter(), &pip)
        }
        Commands::Remove(args) => {
            commands::remove::cmd_remove(&client, &args.name, &args.version, &format)
        }
    }
}
