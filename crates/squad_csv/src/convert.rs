//! JSON → CSV conversion
//!
//! Pipeline: read all input → `serde_json::Value` → [`Roster`] → CSV writer.
//! The output is only opened once the document has been parsed and walked, so
//! a bad input never truncates an existing output file.

use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ConvertError, Result};
use crate::roster::{Roster, HEADER};

/// Row terminator written after every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTerminator {
    /// `\r\n`, as spreadsheets and RFC 4180 expect
    #[default]
    CrLf,
    Lf,
}

impl From<LineTerminator> for csv::Terminator {
    fn from(terminator: LineTerminator) -> Self {
        match terminator {
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
            LineTerminator::CrLf => csv::Terminator::CRLF,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub terminator: LineTerminator,
}

/// Counts reported after a successful conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub teams: usize,
    pub players: usize,
}

/// Read `input` to the end and parse it as a single JSON value.
pub fn parse_document<R: Read>(mut input: R) -> Result<Value> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(ConvertError::ReadInput)?;
    debug!(bytes = bytes.len(), "input read");

    Ok(serde_json::from_slice(&bytes)?)
}

/// Write the header and one record per row of `roster`.
///
/// Fields are quoted only when they contain the delimiter, a quote, or a line
/// break; embedded quotes are doubled.
pub fn write_csv<W: Write>(
    roster: &Roster<'_>,
    output: W,
    options: &ConvertOptions,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(options.terminator.into())
        .from_writer(output);

    writer.write_record(HEADER)?;
    for row in &roster.rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Convert a JSON stream into CSV on `output`.
pub fn convert<R: Read, W: Write>(
    input: R,
    output: W,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let document = parse_document(input)?;
    emit(&document, || Ok(output), options)
}

/// Convert between files, falling back to stdin / stdout when a path is `None`.
///
/// # Errors
///
/// * [`ConvertError::OpenInput`] - input path missing or unreadable
/// * [`ConvertError::Parse`] - input is not valid JSON
/// * [`ConvertError::Structure`] - document has an unexpected shape
/// * [`ConvertError::CreateOutput`] / [`ConvertError::Write`] - output not writable
pub fn convert_paths(
    input: Option<&Path>,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let document = match input {
        Some(path) => parse_document(open_input(path)?)?,
        None => parse_document(io::stdin().lock())?,
    };

    match output {
        Some(path) => emit(&document, || create_output(path), options),
        None => emit(&document, || Ok(io::stdout().lock()), options),
    }
}

fn emit<W, F>(
    document: &Value,
    open_output: F,
    options: &ConvertOptions,
) -> Result<ConversionStats>
where
    W: Write,
    F: FnOnce() -> Result<W>,
{
    let roster = Roster::from_document(document)?;
    let output = open_output()?;
    write_csv(&roster, output, options)?;

    let stats = ConversionStats {
        teams: roster.teams,
        players: roster.len(),
    };
    info!(
        teams = stats.teams,
        players = stats.players,
        "conversion complete"
    );
    Ok(stats)
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| ConvertError::OpenInput {
            path: path.to_path_buf(),
            source,
        })
}

fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| ConvertError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })
}
