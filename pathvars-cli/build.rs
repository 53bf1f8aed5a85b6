//! Build script for pathvars-cli.
//!
//! This script generates the man page at build time using clap_mangen and
//! places it in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here as well.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathvars")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Express filesystem paths relative to named path variables")
        .long_about(
            "Command-line tool for managing path variables and converting paths to and from \
             variable-relative form",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("PATHVARS_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("PATHVARS_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("PATHVARS_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Set up the pathvars database and, optionally, a user configuration"),
            Command::new("define")
                .about("Define or replace a path variable")
                .long_about("Bind a variable name to an absolute path or a variable macro"),
            Command::new("remove")
                .about("Remove a path variable")
                .long_about("Delete a stored variable; builtin variables are read-only"),
            Command::new("list")
                .about("List path variables")
                .long_about("Display stored, configured and builtin variables in various formats"),
            Command::new("resolve")
                .about("Resolve a variable-relative path to an absolute path")
                .long_about("Expand a path such as SRC/lib or ${PARENT-1-SRC}/x"),
            Command::new("relativize")
                .about("Express an absolute path relative to a path variable")
                .long_about(
                    "Rewrite a path through the most specific variable containing it, \
                     optionally deriving a parent variable with --force",
                ),
            Command::new("export")
                .about("Print resolved variables as shell exports, JSON or dotenv")
                .long_about("Emit every resolvable variable for bash, zsh, fish or PowerShell"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathvars configuration file for errors"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the pathvars data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathvars.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
