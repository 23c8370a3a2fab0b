//! Package downloads through `pip download`.

use crate::{IndexError, IndexUrl, PackageRecord};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

/// Downloads individual records with `<python> -m pip download`.
#[derive(Debug, Clone)]
pub struct PipDownload {
    python: String,
    index_url: IndexUrl,
    dest: PathBuf,
    timeout: Duration,
}

impl PipDownload {
    pub fn new(
        python: impl Into<String>,
        index_url: IndexUrl,
        dest: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Self {
        Self {
            python: python.into(),
            index_url,
            dest: dest.into(),
            timeout,
        }
    }

    /// Arguments passed to the interpreter for `record`.
    ///
    /// Pins `name==version`; adds `--python` for CPython wheels and
    /// `--platform` for platform-specific files.
    pub fn args_for(&self, record: &PackageRecord) -> Vec<OsString> {
        self.build_args(record, self.index_url.as_str())
    }

    /// Printable command line with the index password redacted.
    pub fn display_command(&self, record: &PackageRecord) -> String {
        let mut parts = vec![self.python.clone()];
        parts.extend(
            self.build_args(record, self.index_url.redacted())
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned()),
        );
        parts.join(" ")
    }

    fn build_args(&self, record: &PackageRecord, url: &str) -> Vec<OsString> {
        let timeout = self.timeout.as_secs().to_string();
        let mut args: Vec<OsString> = [
            "-m",
            "pip",
            "--default-timeout",
            timeout.as_str(),
            "download",
            "--no-deps",
            "--pre",
            "-i",
            url,
        ]
        .into_iter()
        .map(OsString::from)
        .collect();

        args.push(format!("{}=={}", record.name, record.version).into());
        args.push("-d".into());
        args.push(self.dest.clone().into_os_string());

        if let Some(version) = record.python_tag.strip_prefix("cp") {
            args.push("--python".into());
            args.push(version.into());
        }
        if !record.is_platform_independent() {
            args.push("--platform".into());
            args.push(record.platform.as_str().into());
        }
        args
    }

    /// Run pip for one record, blocking until it exits.
    pub fn run(&self, record: &PackageRecord) -> Result<(), IndexError> {
        tracing::debug!(command = %self.display_command(record), "running pip");
        let status = Command::new(&self.python)
            .args(self.args_for(record))
            .status()?;
        if !status.success() {
            return Err(IndexError::Subprocess {
                program: self.python.clone(),
                status,
            });
        }
        Ok(())
    }
}
