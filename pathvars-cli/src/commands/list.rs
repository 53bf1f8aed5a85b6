//! List command implementation.
//!
//! This module implements the `list` command, which displays every visible
//! variable (stored, configured and builtin) in various formats (table,
//! JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{
    format_timestamp, load_configuration, open_database, registry, shorten_path, GlobalOptions,
};
use clap::{Args, ValueEnum};
use pathvars::config::OutputFormat as ConfigOutputFormat;
use pathvars::database::VariableRecord;
use pathvars::{Database, PathVariableResolver};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::Path;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 5] = ["name", "value", "location", "source", "updated_at"];

/// List path variables.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured format, then table)
    #[arg(long, value_enum, env = "PATHVARS_OUTPUT_FORMAT", ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Only list variables from this source
    #[arg(long, value_enum, value_name = "SOURCE")]
    pub source: Option<Source>,

    /// Show full paths instead of shortened forms
    #[arg(long)]
    pub show_full_paths: bool,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<ConfigOutputFormat> for OutputFormat {
    fn from(format: ConfigOutputFormat) -> Self {
        match format {
            ConfigOutputFormat::Table => Self::Table,
            ConfigOutputFormat::Json => Self::Json,
            ConfigOutputFormat::Csv => Self::Csv,
            ConfigOutputFormat::Tsv => Self::Tsv,
        }
    }
}

/// Where a variable's value comes from.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Stored in the variable database
    Database,
    /// Declared in a configuration file or the environment
    Config,
    /// Computed from the project context
    Builtin,
}

impl Source {
    fn as_str(self) -> &'static str {
        match self {
            Source::Database => "database",
            Source::Config => "config",
            Source::Builtin => "builtin",
        }
    }
}

/// One listed variable.
#[derive(Serialize)]
struct ListRow {
    name: String,
    value: String,
    location: Option<String>,
    source: Source,
    updated_at: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let records: HashMap<String, VariableRecord> = Database::list_variables(db.connection())?
            .into_iter()
            .map(|r| (r.name.clone(), r))
            .collect();
        let seed = config.variables.clone().unwrap_or_default();

        let visible = db.view_seeded_variables(&seed, registry(), config.project_context(), |vars| {
            let mut visible = Vec::new();
            for name in vars.variable_names()? {
                let Some(value) = vars.value(&name)? else {
                    continue;
                };
                let location = match vars.resolve_path(&value) {
                    Ok(location) => location.is_absolute().then_some(location),
                    Err(pathvars::Error::VariableCycle { .. }) => None,
                    Err(e) => return Err(e),
                };
                visible.push((name, value, location));
            }
            Ok(visible)
        })?;

        let mut rows: Vec<ListRow> = visible
            .into_iter()
            .map(|(name, value, location)| {
                let record = records.get(&name);
                ListRow {
                    source: source_of(&name, record, &seed),
                    updated_at: record.map(|r| format_timestamp(r.updated_at)),
                    value: value.to_portable_string(),
                    location: location.map(|location| location.to_os_string()),
                    name,
                }
            })
            .collect();

        if let Some(source) = self.source {
            rows.retain(|row| row.source == source);
        }

        let format = self
            .format
            .or_else(|| config.output_format.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Table);

        match format {
            OutputFormat::Table => format_as_table(&rows, self.show_full_paths)?,
            OutputFormat::Json => format_as_json(&rows)?,
            OutputFormat::Csv => format_as_delimited(&rows, b',')?,
            OutputFormat::Tsv => format_as_delimited(&rows, b'\t')?,
        }

        Ok(())
    }
}

fn source_of(
    name: &str,
    record: Option<&VariableRecord>,
    seed: &BTreeMap<String, String>,
) -> Source {
    if record.is_some() {
        Source::Database
    } else if seed.contains_key(name) {
        Source::Config
    } else {
        Source::Builtin
    }
}

/// Format variables as a human-readable table.
fn format_as_table(rows: &[ListRow], show_full: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        let location = match &row.location {
            Some(location) if !show_full => shorten_path(Path::new(location)),
            Some(location) => location.clone(),
            None => "-".to_string(),
        };

        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            row.name,
            row.value,
            location,
            row.source.as_str(),
            row.updated_at.as_deref().unwrap_or("-"),
        )?;
    }

    Ok(())
}

/// Format variables as JSON.
fn format_as_json(rows: &[ListRow]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, rows).map_err(std::io::Error::other)?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format variables as delimited output (CSV or TSV).
fn format_as_delimited(rows: &[ListRow], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for row in rows {
        writer
            .write_record([
                row.name.as_str(),
                row.value.as_str(),
                row.location.as_deref().unwrap_or(""),
                row.source.as_str(),
                row.updated_at.as_deref().unwrap_or(""),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_of_prefers_database() {
        let seed = BTreeMap::from([("SRC".to_string(), "/cfg/src".to_string())]);
        let record = VariableRecord {
            name: "SRC".to_string(),
            value: pathvars::VariablePath::from("/db/src"),
            created_at: std::time::SystemTime::UNIX_EPOCH,
            updated_at: std::time::SystemTime::UNIX_EPOCH,
        };

        assert!(matches!(source_of("SRC", Some(&record), &seed), Source::Database));
        assert!(matches!(source_of("SRC", None, &seed), Source::Config));
        assert!(matches!(source_of("PROJECT_LOC", None, &seed), Source::Builtin));
    }

    #[test]
    fn test_config_format_maps_to_list_format() {
        assert!(matches!(
            OutputFormat::from(ConfigOutputFormat::Tsv),
            OutputFormat::Tsv
        ));
    }
}
