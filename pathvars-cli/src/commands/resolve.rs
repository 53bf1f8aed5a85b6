//! Resolve command implementation.
//!
//! Turns a variable-relative path (`SRC/lib/a.c`, `${SRC}/lib`,
//! `PARENT-1-SRC/x`) back into an absolute filesystem path.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, registry, GlobalOptions};
use clap::Args;
use pathvars::{PathVariableResolver, VariablePath};

/// Resolve a variable-relative path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path whose first segment names a variable
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ResolveCommand {
    /// Execute the resolve command.
    ///
    /// Absolute input is printed unchanged. A path whose head is not a
    /// defined variable is a semantic failure.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let input = VariablePath::from(self.path.as_str());

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        let seed = config.variables.clone().unwrap_or_default();

        let resolved = db.view_seeded_variables(&seed, registry(), config.project_context(), |vars| {
            vars.resolve_path(&input)
        })?;

        if !resolved.is_absolute() {
            let head = input.segment(0).unwrap_or_default();
            return Err(CliError::SemanticFailure(format!(
                "Cannot resolve '{}': '{head}' is not a defined variable",
                self.path
            )));
        }

        println!("{}", resolved.to_os_string());
        Ok(())
    }
}
