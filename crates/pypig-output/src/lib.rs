//! Output formatting utilities.
//!
//! Provides consistent JSON/text output across all commands via the `OutputFormatter` trait,
//! plus a right-aligned [`Table`] used by the listing commands.

use serde::Serialize;
use std::io::IsTerminal;

/// Output format and display mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain aligned text output (default).
    #[default]
    Text,
    /// Pretty text output (human-friendly, with colors if available).
    Pretty { colors: bool },
    /// JSON output.
    Json,
    /// JSON Lines output (one JSON object per line, arrays emit each element).
    JsonLines,
    /// JSON filtered through jq expression. If jsonl is true, emit results as JSON Lines.
    Jq { filter: String, jsonl: bool },
}

impl OutputFormat {
    /// Create from CLI flags.
    pub fn from_cli(json: bool, jsonl: bool, jq: Option<&str>, pretty: bool) -> Self {
        // JSON modes take precedence
        if let Some(filter) = jq {
            return OutputFormat::Jq {
                filter: filter.to_string(),
                jsonl,
            };
        }
        if jsonl {
            return OutputFormat::JsonLines;
        }
        if json {
            return OutputFormat::Json;
        }

        if pretty {
            OutputFormat::Pretty {
                colors: use_colors(),
            }
        } else {
            OutputFormat::Text
        }
    }
}

/// Should colors be used? Respects NO_COLOR, otherwise requires a TTY.
fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Trait for types that can format output in multiple formats.
///
/// JSON serialization uses serde, while text formatting is custom.
/// Schema generation uses schemars for `--output-schema` support.
pub trait OutputFormatter: Serialize + schemars::JsonSchema {
    /// Format as plain text.
    fn format_text(&self) -> String;

    /// Format as pretty text (human-friendly with colors).
    /// Default implementation falls back to format_text().
    fn format_pretty(&self, colors: bool) -> String {
        let _ = colors;
        self.format_text()
    }

    /// Render in the specified format.
    ///
    /// Returns one string per output line group; jq may yield several results.
    fn render(&self, format: &OutputFormat) -> Result<Vec<String>, String> {
        match format {
            OutputFormat::Text => Ok(vec![self.format_text()]),
            OutputFormat::Pretty { colors } => Ok(vec![self.format_pretty(*colors)]),
            OutputFormat::Json => serde_json::to_string(self)
                .map(|s| vec![s])
                .map_err(|e| e.to_string()),
            OutputFormat::JsonLines => {
                let json = serde_json::to_value(self).map_err(|e| e.to_string())?;
                Ok(jsonl_lines(&json))
            }
            OutputFormat::Jq { filter, jsonl } => {
                let json = serde_json::to_value(self).map_err(|e| e.to_string())?;
                let results = apply_jq(&json, filter)?;
                if !*jsonl {
                    return Ok(results);
                }
                // Parse and emit as JSONL (arrays get expanded)
                Ok(results
                    .into_iter()
                    .flat_map(|result| match serde_json::from_str(&result) {
                        Ok(val) => jsonl_lines(&val),
                        Err(_) => vec![result],
                    })
                    .collect())
            }
        }
    }

    /// Print to stdout in the specified format.
    fn print(&self, format: &OutputFormat) -> Result<(), String> {
        for line in self.render(format)? {
            println!("{}", line);
        }
        Ok(())
    }
}

/// Split a JSON value into JSON Lines.
/// Arrays emit each element as a separate line, objects with a single array
/// field emit that field's elements, other values emit as a single line.
fn jsonl_lines(value: &serde_json::Value) -> Vec<String> {
    let items = match value {
        serde_json::Value::Array(arr) => arr.as_slice(),
        serde_json::Value::Object(map) if map.len() == 1 => match map.values().next() {
            Some(serde_json::Value::Array(arr)) => arr.as_slice(),
            _ => std::slice::from_ref(value),
        },
        _ => std::slice::from_ref(value),
    };
    items
        .iter()
        .map(|item| serde_json::to_string(item).unwrap_or_default())
        .collect()
}

/// Print JSON schema for a type implementing OutputFormatter.
/// Use this for `--output-schema` flag handling.
pub fn print_output_schema<T: OutputFormatter>() {
    let schema = schemars::schema_for!(T);
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    );
}

/// Apply a jq filter to a JSON value.
pub fn apply_jq(value: &serde_json::Value, filter: &str) -> Result<Vec<String>, String> {
    use jaq_core::load::{Arena, File as JaqFile, Loader};
    use jaq_core::{Compiler, Ctx, RcIter};
    use jaq_json::Val;

    let loader = Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = Arena::default();

    let program = JaqFile {
        code: filter,
        path: (),
    };

    let modules = loader
        .load(&arena, program)
        .map_err(|errs| format!("jq parse error: {:?}", errs))?;

    let compiled = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(|errs| format!("jq compile error: {:?}", errs))?;

    let val = Val::from(value.clone());
    let inputs = RcIter::new(core::iter::empty());
    let out = compiled.run((Ctx::new([], &inputs), val));

    let mut results = Vec::new();
    for result in out {
        match result {
            Ok(v) => results.push(v.to_string()),
            Err(e) => return Err(format!("jq runtime error: {:?}", e)),
        }
    }

    Ok(results)
}

// ============================================================================
// Table
// ============================================================================

/// A text table whose columns are right-aligned to their widest cell.
///
/// An optional separator row sits under the header; each of its cells is the
/// fill character repeated to the length of the longest header.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    separator: Option<char>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            separator: None,
            rows: Vec::new(),
        }
    }

    /// Add a separator row filled with `fill` under the header.
    pub fn with_separator(mut self, fill: char) -> Self {
        self.separator = Some(fill);
        self
    }

    /// Append a data row. Missing trailing cells render as empty.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn separator_cell(&self) -> Option<String> {
        let fill = self.separator?;
        let len = self
            .headers
            .iter()
            .map(|h| h.chars().count())
            .max()
            .unwrap_or(0);
        Some(std::iter::repeat_n(fill, len).collect())
    }

    /// Width of each column: the widest of header, separator and data cells.
    pub fn widths(&self) -> Vec<usize> {
        let sep_len = self
            .separator_cell()
            .map(|s| s.chars().count())
            .unwrap_or(0);
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count(), sep_len])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render without styling.
    pub fn render(&self) -> String {
        self.render_styled(|s| s.to_string())
    }

    /// Render, passing the padded header row through `header_style`.
    ///
    /// Styling is applied after padding so escape codes never affect alignment.
    pub fn render_styled(&self, header_style: impl Fn(&str) -> String) -> String {
        let widths = self.widths();
        let format_row = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(i, &width)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!("{:>width$}", cell, width = width)
                })
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut lines = vec![header_style(&format_row(&self.headers))];
        if let Some(sep) = self.separator_cell() {
            lines.push(format_row(vec![sep; self.headers.len()].as_slice()));
        }
        lines.extend(self.rows.iter().map(|row| format_row(row.as_slice())));
        lines.join("\n")
    }
}
