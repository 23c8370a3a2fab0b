//! Command-line arguments.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use pypig_index::{PackageFilter, VersionRange, cpython_tag};
use pypig_output::OutputFormat;
use std::path::PathBuf;

use crate::config::Credentials;

#[derive(Parser, Debug)]
#[command(name = "pypig", version)]
#[command(about = "Command line utility for managing a private pypiserver", long_about = None)]
pub struct Cli {
    /// Username for the server
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Password for the server
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Url of the package index (must start with https://)
    #[arg(long, global = true)]
    pub index: Option<String>,

    /// Timeout in seconds for calls to the server and pip
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout: u64,

    /// Read the package listing from a local file instead of the server
    #[arg(long, global = true, hide = true, value_name = "FILE")]
    pub debug: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub output: OutputArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Credentials given explicitly on the command line.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            index: self.index.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Output format flags.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output as JSON Lines (one object per line)
    #[arg(long, global = true)]
    pub jsonl: bool,

    /// Filter JSON output with a jq expression
    #[arg(long, global = true, value_name = "FILTER")]
    pub jq: Option<String>,

    /// Human-friendly output with colors
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Print the JSON schema of the command's output and exit
    #[arg(long, global = true)]
    pub output_schema: bool,
}

impl OutputArgs {
    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_cli(self.json, self.jsonl, self.jq.as_deref(), self.pretty)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List packages
    List(FilterArgs),

    /// Download packages. Warning: with no filters all packages will be downloaded
    Download(DownloadArgs),

    /// Remove a package version from the server
    Remove(RemoveArgs),
}

/// Operating systems accepted by `--platform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    Linux,
    Macos,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Macos => "macos",
        }
    }
}

/// Filters shared by `list` and `download`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Package name
    pub name: Option<String>,

    /// Package version or inclusive range, one or two arguments
    #[arg(long = "version", num_args = 1..=2, value_name = "VERSION")]
    pub versions: Vec<String>,

    /// Version of python3, e.g. 3.8
    #[arg(long, value_parser = parse_pyver)]
    pub pyver: Option<String>,

    /// Operating system
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,
}

impl FilterArgs {
    pub fn filter(&self) -> PackageFilter {
        PackageFilter {
            name: self.name.clone(),
            version: VersionRange::from_values(&self.versions),
            python_tag: self.pyver.as_deref().and_then(cpython_tag),
            platform: self.platform.map(|p| p.as_str().to_string()),
        }
    }
}

#[derive(Args, Debug)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Directory to download to
    #[arg(short, long, default_value = ".")]
    pub dest: PathBuf,

    /// Python interpreter used to run pip
    #[arg(long, default_value = "python3", value_name = "EXE")]
    pub python_exe: String,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,
}

fn parse_pyver(value: &str) -> Result<String, String> {
    match cpython_tag(value) {
        Some(_) => Ok(value.to_string()),
        None => Err(format!("expected a python version like 3.8, got '{}'", value)),
    }
}
