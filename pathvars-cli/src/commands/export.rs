//! Export command implementation.
//!
//! Prints every variable that resolves to an absolute location, either as
//! shell assignments (`export SRC='/srv/src'`) or as JSON, dotenv or a
//! human-readable listing.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, registry, GlobalOptions};
use clap::{Args, ValueEnum};
use pathvars::output::{OutputFormat, ShellType};

/// Print resolved variables.
#[derive(Args)]
pub struct ExportCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "export", ignore_case = true)]
    pub format: ExportFormat,

    /// Shell syntax for `export` format (bash, zsh, fish, powershell);
    /// detected from `$SHELL` when omitted
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<String>,

    /// Prefix added to every exported name
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,
}

/// Output format for the export command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Shell assignments
    Export,
    /// JSON object
    Json,
    /// KEY=value lines
    Dotenv,
    /// Aligned listing
    Human,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let format = match self.format {
            ExportFormat::Export => OutputFormat::Export(self.shell_type()?),
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Dotenv => OutputFormat::Dotenv,
            ExportFormat::Human => OutputFormat::Human,
        };

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let seed = config.variables.clone().unwrap_or_default();

        let variables = db.view_seeded_variables(&seed, registry(), config.project_context(), |vars| {
            vars.resolved_variables()
        })?;

        let output = format.create_formatter(self.prefix).format(&variables)?;
        print!("{output}");
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
        Ok(())
    }

    fn shell_type(&self) -> Result<ShellType, CliError> {
        match &self.shell {
            Some(name) => ShellType::from_string(name)
                .map_err(|e| CliError::InvalidArguments(e.to_string())),
            None => Ok(ShellType::detect()),
        }
    }
}
