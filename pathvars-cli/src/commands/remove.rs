//! Remove command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, registry, GlobalOptions};
use clap::Args;

/// Remove a path variable.
#[derive(Args)]
pub struct RemoveCommand {
    /// Variable name
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl RemoveCommand {
    /// Execute the remove command.
    ///
    /// Removing a variable that is not stored is a semantic failure; builtin
    /// variables are read-only.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let removed = db.with_variables(registry(), config.project_context(), |vars| {
            vars.remove_value(&self.name)
        })?;

        if !removed {
            return Err(CliError::SemanticFailure(format!(
                "Variable '{}' is not defined",
                self.name
            )));
        }

        if !global.quiet {
            println!("Removed {}", self.name);
        }
        Ok(())
    }
}
