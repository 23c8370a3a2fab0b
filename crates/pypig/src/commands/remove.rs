//! `pypig remove`

use crate::error::{CliError, Outcome};
use pypig_index::{IndexClient, RemoveResponse};
use pypig_output::{OutputFormat, OutputFormatter};
use serde::Serialize;

/// Server reply to a removal, as printed.
#[derive(Debug, Clone, Serialize, schemars::JsonSchema)]
pub struct RemoveReport {
    pub name: String,
    pub version: String,
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RemoveReport {
    fn new(name: &str, version: &str, response: RemoveResponse) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            status: response.status,
            status_text: response.status_text,
            body: response.body,
        }
    }
}

impl OutputFormatter for RemoveReport {
    fn format_text(&self) -> String {
        let status = format!("HTTP {} {}", self.status, self.status_text);
        let body = self.body.trim();
        if body.is_empty() {
            status
        } else {
            format!("{}\n{}", status, body)
        }
    }
}

pub fn cmd_remove(
    client: &IndexClient,
    name: &str,
    version: &str,
    format: &OutputFormat,
) -> Result<Outcome, CliError> {
    let response = client.remove(name, version)?;
    tracing::info!(name, version, status = response.status, "removed package");
    RemoveReport::new(name, version, response)
        .print(format)
        .map_err(CliError::Output)?;
    Ok(Outcome::Success)
}
