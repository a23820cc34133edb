use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use serde_json::Value;

use super::rows::{Row, row_from_object};
use crate::errors::{with_parse_context, with_read_context};

/// Read a fixture table exported as a JSON array of row objects
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let json = with_read_context(fs::read_to_string(path), path)?;
    parse_rows(&json)
}

pub fn parse_rows(json: &str) -> Result<Vec<Row>> {
    let value: Value = with_parse_context(serde_json::from_str(json), "fixture table JSON")?;

    let Value::Array(items) = value else {
        bail!("Fixture table must be a JSON array of rows");
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(object) => Ok(row_from_object(object)),
            other => bail!("Fixture row {} is not an object: {}", idx, other),
        })
        .collect()
}
