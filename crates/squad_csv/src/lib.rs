//! Squad CSV Library
//!
//! Teams/players JSON → `player,nationality` CSV
//!
//! ```text
//! { "data": [ { "players": [ { "name": "...", "country": "..." } ] } ] }
//! ```
//!
//! Missing `data`, `players`, `name` or `country` keys are read as empty.
//! Anything present with the wrong JSON type is reported as a structure error.

pub mod convert;
pub mod error;
pub mod roster;

use serde::Serialize;
use std::fs;
use std::path::Path;

pub use convert::{
    convert, convert_paths, parse_document, write_csv, ConversionStats, ConvertOptions,
    LineTerminator,
};
pub use error::{ConvertError, ErrorKind, Result};
pub use roster::{extract_rows, PlayerRow, Roster, HEADER};

/// Conversion metadata sidecar
#[derive(Debug, Clone, Serialize)]
pub struct ConversionMetadata {
    /// Team objects visited
    pub teams: usize,
    /// Rows written (excluding the header)
    pub players: usize,
    /// Input path, or `<stdin>`
    pub input: String,
    /// Output path, or `<stdout>`
    pub output: String,
    /// Creation time (RFC3339)
    pub created_at: String,
}

impl ConversionMetadata {
    pub fn new(stats: ConversionStats, input: Option<&Path>, output: Option<&Path>) -> Self {
        Self {
            teams: stats.teams,
            players: stats.players,
            input: describe(input, "<stdin>"),
            output: describe(output, "<stdout>"),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn describe(path: Option<&Path>, fallback: &str) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Write `meta` as pretty-printed JSON to `path`.
pub fn write_metadata(path: &Path, meta: &ConversionMetadata) -> Result<()> {
    let to_metadata_error = |source: std::io::Error| ConvertError::Metadata {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_vec_pretty(meta).map_err(|e| to_metadata_error(e.into()))?;
    fs::write(path, json).map_err(to_metadata_error)
}
