//! Integration tests for the `list` and `export` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn env_with_variables() -> TestEnv {
    let env = TestEnv::new();
    env.define("SRC", "/srv/src");
    env.define("LIB", "${SRC}/lib");
    env
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_table_has_header_and_rows() {
    let env = env_with_variables();
    let output = env.stdout_of(&["list"]);
    let mut lines = output.lines();

    assert_eq!(
        lines.next(),
        Some("NAME\tVALUE\tLOCATION\tSOURCE\tUPDATED_AT")
    );
    let rows: Vec<&str> = lines.collect();
    assert!(rows.iter().any(|r| r.starts_with("LIB\t${SRC}/lib\t/srv/src/lib\tdatabase\t")));
    assert!(rows.iter().any(|r| r.starts_with("SRC\t/srv/src\t/srv/src\tdatabase\t")));
}

#[test]
fn test_list_json() {
    let env = env_with_variables();
    let output = env.stdout_of(&["list", "--format", "json"]);
    let rows: serde_json::Value = serde_json::from_str(&output).unwrap();
    let rows = rows.as_array().unwrap();

    let lib = rows.iter().find(|r| r["name"] == "LIB").unwrap();
    assert_eq!(lib["value"], "${SRC}/lib");
    assert_eq!(lib["location"], "/srv/src/lib");
    assert_eq!(lib["source"], "database");
    assert!(lib["updated_at"].is_string());
}

#[test]
fn test_list_tsv_from_environment() {
    let env = env_with_variables();
    env.command()
        .env("PATHVARS_OUTPUT_FORMAT", "tsv")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name\tvalue\tlocation\tsource\tupdated_at"));
}

#[test]
fn test_list_format_from_config_file() {
    let env = env_with_variables();
    env.write_file("pathvars.yaml", "output_format: csv\n");

    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,value,location,source,updated_at"));
}

#[test]
fn test_list_source_filter() {
    let env = env_with_variables();
    env.write_file("pathvars.yaml", "workspace_location: /ws\n");

    let output = env.stdout_of(&["list", "--format", "csv", "--source", "builtin"]);
    let rows: Vec<&str> = output.lines().skip(1).collect();
    assert_eq!(rows, vec!["WORKSPACE_LOC,/ws,/ws,builtin,"]);
}

#[test]
fn test_list_empty_database() {
    let env = TestEnv::new();
    let output = env.stdout_of(&["list", "--format", "csv"]);
    assert_eq!(output, "name,value,location,source,updated_at");
}

// ============================================================================
// export
// ============================================================================

#[test]
fn test_export_bash() {
    let env = env_with_variables();
    let output = env.stdout_of(&["export", "--shell", "bash"]);
    assert_eq!(
        output,
        "export LIB='/srv/src/lib'\nexport SRC='/srv/src'"
    );
}

#[test]
fn test_export_with_prefix() {
    let env = env_with_variables();
    let output = env.stdout_of(&["export", "--shell", "bash", "--prefix", "PV_"]);
    assert!(output.contains("export PV_SRC='/srv/src'"), "{output}");
}

#[test]
fn test_export_fish() {
    let env = env_with_variables();
    let output = env.stdout_of(&["export", "--shell", "fish"]);
    assert!(output.contains("set -x SRC '/srv/src'"), "{output}");
}

#[test]
fn test_export_json() {
    let env = env_with_variables();
    let output = env.stdout_of(&["export", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["SRC"], "/srv/src");
    assert_eq!(value["LIB"], "/srv/src/lib");
}

#[test]
fn test_export_dotenv_and_human() {
    let env = env_with_variables();
    let dotenv = env.stdout_of(&["export", "--format", "dotenv"]);
    assert!(dotenv.lines().any(|l| l == "SRC=/srv/src"), "{dotenv}");

    let human = env.stdout_of(&["export", "--format", "human"]);
    assert!(human.starts_with("Path variables:"), "{human}");
}

#[test]
fn test_export_unknown_shell_fails() {
    let env = env_with_variables();
    env.command()
        .args(["export", "--shell", "tcsh"])
        .assert()
        .code(4);
}
