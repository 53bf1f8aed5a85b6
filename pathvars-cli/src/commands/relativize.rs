//! Relativize command implementation.
//!
//! Expresses an absolute path through the most specific variable that
//! contains it. With `--force`, a path outside every variable is expressed
//! through a parent of one, defining at most one new variable.

use crate::error::CliError;
use crate::utils::{load_configuration, normalize_path, open_database, registry, GlobalOptions};
use clap::Args;
use pathvars::Relativizer;
use std::path::PathBuf;

/// Express an absolute path relative to a path variable.
#[derive(Args)]
pub struct RelativizeCommand {
    /// Path to relativize (relative paths are taken from the current directory)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Allow matching through a parent of a variable, defining one if needed
    #[arg(long)]
    pub force: bool,

    /// Try this variable first; ignored if undefined
    #[arg(long, value_name = "VAR")]
    pub hint: Option<String>,

    /// Print the result as a `${NAME}/rest` macro
    #[arg(long = "macro")]
    pub as_macro: bool,
}

impl RelativizeCommand {
    /// Execute the relativize command.
    ///
    /// When no variable matches, the normalized input path is printed.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let target = normalize_path(&self.path)?;

        let config = load_configuration(global)?;
        let force = self.force || config.force.unwrap_or(false);
        let relativizer = Relativizer::new(config.case_sensitivity());
        let seed = config.variables.clone().unwrap_or_default();
        let hint = self.hint.as_deref();

        let mut db = open_database(global, &config)?;
        let relative = db.with_seeded_variables(&seed, registry(), config.project_context(), |vars| {
            if self.as_macro {
                relativizer.to_relative_macro(vars, &target, force, hint)
            } else {
                relativizer.to_relative(vars, &target, force, hint)
            }
        })?;

        if relative == target {
            log::debug!("no variable contains {}", target.to_os_string());
            println!("{}", target.to_os_string());
        } else {
            println!("{}", relative.to_portable_string());
        }
        Ok(())
    }
}
