use std::path::Path;

use anyhow::{Context, Result, bail};
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{Connection, OpenFlags, params_from_iter};
use serde_json::Value;

use super::rows::{AWAY_SCORE, AWAY_TEAM, DATE, HOME_SCORE, HOME_TEAM, LOCATION, ROUND_NUMBER, Row};

const COLUMNS: [&str; 7] = [
    ROUND_NUMBER,
    HOME_TEAM,
    AWAY_TEAM,
    DATE,
    LOCATION,
    HOME_SCORE,
    AWAY_SCORE,
];

pub fn open(path: &Path) -> Result<Connection> {
    Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .with_context(|| format!("Failed to open fixture database: {}", path.display()))
}

/// Create a new fixture database. An existing file is never overwritten.
pub fn create(path: &Path) -> Result<Connection> {
    if path.exists() {
        bail!("Fixture database already exists: {}", path.display());
    }
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to create fixture database: {}", path.display()))?;
    create_schema(&conn)?;
    Ok(conn)
}

pub fn create_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        conn.execute(statement, [])
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::info!("Fixture schema created");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Append rows to the `fixtures` table in order, keeping every row so that
/// row positions match the source table
pub fn import_rows(conn: &mut Connection, rows: &[Row]) -> Result<usize> {
    let quoted: Vec<String> = COLUMNS.iter().map(|c| format!("\"{}\"", c)).collect();
    let placeholders: Vec<String> = (1..=COLUMNS.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "INSERT INTO fixtures ({}) VALUES ({})",
        quoted.join(", "),
        placeholders.join(", ")
    );

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&sql).context("Failed to prepare fixture insert")?;
        for (idx, row) in rows.iter().enumerate() {
            let values = COLUMNS.iter().map(|column| to_sql(row.get(*column)));
            stmt.execute(params_from_iter(values))
                .with_context(|| format!("Failed to insert fixture row {}", idx))?;
        }
    }
    tx.commit().context("Failed to commit fixture rows")?;

    log::info!("Imported {} fixture rows", rows.len());
    Ok(rows.len())
}

fn to_sql(value: Option<&Value>) -> SqlValue {
    match value {
        None | Some(Value::Null) => SqlValue::Null,
        Some(Value::Bool(b)) => SqlValue::Integer(i64::from(*b)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => n.as_f64().map(SqlValue::Real).unwrap_or(SqlValue::Null),
        },
        Some(Value::String(s)) => SqlValue::Text(s.clone()),
        Some(other) => SqlValue::Text(other.to_string()),
    }
}

/// Read the `fixtures` table in insertion order
pub fn load_rows(conn: &Connection) -> Result<Vec<Row>> {
    let mut stmt = conn
        .prepare("SELECT * FROM fixtures ORDER BY rowid")
        .context("Failed to query fixtures table")?;

    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect();

    let rows = stmt
        .query_map([], |sql_row| {
            let mut row = Row::new();
            for (idx, column) in columns.iter().enumerate() {
                row.insert(column.clone(), to_json(sql_row.get_ref(idx)?));
            }
            Ok(row)
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to read fixture rows")?;

    Ok(rows)
}

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null | ValueRef::Blob(_) => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}
