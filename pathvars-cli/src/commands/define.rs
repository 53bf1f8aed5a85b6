//! Define command implementation.
//!
//! Binds a name to a location in the variable database, replacing any
//! previous value.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_path_argument, registry, GlobalOptions};
use clap::Args;
use pathvars::PathVariableResolver;

/// Define or replace a path variable.
#[derive(Args)]
pub struct DefineCommand {
    /// Variable name (letters, digits and underscores, not starting with a digit)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Location: an absolute path, a path relative to the current directory,
    /// or a macro such as `${SRC}/lib`
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl DefineCommand {
    /// Execute the define command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let value = parse_path_argument(&self.path)?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        db.with_variables(registry(), config.project_context(), |vars| {
            vars.set_value(&self.name, &value)
        })?;

        if !global.quiet {
            println!("{} = {}", self.name, value.to_portable_string());
        }
        Ok(())
    }
}
