//! SQL for the variable database.

/// Schema version written to the `metadata` table.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Key/value table holding the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// User-defined variables. `value` is the portable path string; timestamps
/// are Unix seconds.
pub const CREATE_VARIABLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS variables (
        name TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// Read the schema version.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// Write the schema version.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Insert a variable, keeping `created_at` when it already exists.
pub const UPSERT_VARIABLE: &str = r"
    INSERT INTO variables (name, value, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?3)
    ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
";

/// One variable row by name.
pub const SELECT_VARIABLE: &str = r"
    SELECT name, value, created_at, updated_at
    FROM variables
    WHERE name = ?
";

/// The stored value of one variable.
pub const SELECT_VARIABLE_VALUE: &str = "SELECT value FROM variables WHERE name = ?";

/// All variable rows, ordered by name.
pub const LIST_VARIABLES: &str = r"
    SELECT name, value, created_at, updated_at
    FROM variables
    ORDER BY name
";

/// All variable names, ordered.
pub const LIST_VARIABLE_NAMES: &str = "SELECT name FROM variables ORDER BY name";

/// Delete one variable.
pub const DELETE_VARIABLE: &str = "DELETE FROM variables WHERE name = ?";
