//! Roster traversal
//!
//! Walks `data[] → players[] → {name, country}` over a parsed
//! `serde_json::Value`. Missing keys fall back to empty values; a key that is
//! present with the wrong JSON type is a structure error.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ConvertError, Result};

/// CSV header, in column order
pub const HEADER: [&str; 2] = ["player", "nationality"];

/// One output row, borrowed from the parsed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerRow<'a> {
    /// Player `name` (empty when absent or null)
    pub player: &'a str,
    /// Player `country` (empty when absent or null)
    pub nationality: &'a str,
}

/// All rows of a document, in encounter order
#[derive(Debug, Clone, Default)]
pub struct Roster<'a> {
    /// Number of team objects under `data`
    pub teams: usize,
    pub rows: Vec<PlayerRow<'a>>,
}

impl<'a> Roster<'a> {
    /// Traverse a parsed document.
    ///
    /// Teams are visited in document order and players in team order; no row
    /// is dropped, merged, or reordered.
    pub fn from_document(document: &'a Value) -> Result<Self> {
        let root = as_object(document, || "document root".to_string())?;
        let teams = list_or_empty(root, "data", || "data".to_string())?;

        let mut rows = Vec::new();
        for (t, team) in teams.iter().enumerate() {
            let team = as_object(team, || format!("data[{t}]"))?;
            let players = list_or_empty(team, "players", || format!("data[{t}].players"))?;
            debug!(team = t, players = players.len(), "walking team");

            for (p, player) in players.iter().enumerate() {
                let player = as_object(player, || format!("data[{t}].players[{p}]"))?;
                rows.push(PlayerRow {
                    player: text_or_empty(player, "name", || {
                        format!("data[{t}].players[{p}].name")
                    })?,
                    nationality: text_or_empty(player, "country", || {
                        format!("data[{t}].players[{p}].country")
                    })?,
                });
            }
        }

        Ok(Self {
            teams: teams.len(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows of `document` without the team count
pub fn extract_rows(document: &Value) -> Result<Vec<PlayerRow<'_>>> {
    Roster::from_document(document).map(|roster| roster.rows)
}

/// JSON type name used in structure diagnostics
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(location: String, expected: &'static str, found: &Value) -> ConvertError {
    ConvertError::Structure {
        location,
        expected,
        found: type_name(found),
    }
}

fn as_object<'a, F>(value: &'a Value, location: F) -> Result<&'a Map<String, Value>>
where
    F: FnOnce() -> String,
{
    value
        .as_object()
        .ok_or_else(|| mismatch(location(), "object", value))
}

/// Optional list field; absent means empty. `null` is not absent.
fn list_or_empty<'a, F>(
    object: &'a Map<String, Value>,
    key: &str,
    location: F,
) -> Result<&'a [Value]>
where
    F: FnOnce() -> String,
{
    match object.get(key) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(mismatch(location(), "array", other)),
    }
}

/// Optional text field; absent or null means empty.
fn text_or_empty<'a, F>(
    object: &'a Map<String, Value>,
    key: &str,
    location: F,
) -> Result<&'a str>
where
    F: FnOnce() -> String,
{
    match object.get(key) {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(text)) => Ok(text.as_str()),
        Some(other) => Err(mismatch(location(), "string", other)),
    }
}
