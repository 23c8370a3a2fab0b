//! Package table output.

use crate::PackageRecord;
use nu_ansi_term::Style;
use pypig_output::{OutputFormatter, Table};
use serde::Serialize;

const COLUMNS: [&str; 5] = ["name", "version", "python", "platform", "type"];

/// Filtered packages, ready to print.
#[derive(Debug, Clone, Serialize, schemars::JsonSchema)]
pub struct PackageReport {
    pub packages: Vec<PackageRecord>,
}

impl PackageReport {
    pub fn new(packages: Vec<PackageRecord>) -> Self {
        Self { packages }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    fn table(&self) -> Table {
        let mut table = Table::new(COLUMNS).with_separator('=');
        for pkg in &self.packages {
            table.push_row([
                pkg.name.as_str(),
                pkg.version.as_str(),
                pkg.python_tag.as_str(),
                pkg.platform.as_str(),
                pkg.kind.as_str(),
            ]);
        }
        table
    }
}

impl OutputFormatter for PackageReport {
    fn format_text(&self) -> String {
        self.table().render()
    }

    fn format_pretty(&self, colors: bool) -> String {
        if !colors {
            return self.format_text();
        }
        let header = Style::new().bold();
        self.table()
            .render_styled(|row| header.paint(row).to_string())
    }
}
