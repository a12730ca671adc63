//! Datasets Module
//!
//! One fetch/transform per portal export. Each transform takes the raw
//! semicolon-delimited export text, keeps the known column subset, renames
//! headers to the localized output names, derives columns where needed, and
//! serializes back to comma-delimited UTF-8 CSV.

mod backupsets;
mod groups;
mod licenses;

use crate::error::{ExporterError, Result};

// == Dataset ==
/// One of the three tabular exports republished by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Licenses,
    Backupsets,
    Groups,
}

impl Dataset {
    /// Refresh order: licenses first, groups last.
    pub const ALL: [Dataset; 3] = [Dataset::Licenses, Dataset::Backupsets, Dataset::Groups];

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Licenses => "licenses",
            Dataset::Backupsets => "backupsets",
            Dataset::Groups => "groups",
        }
    }

    /// File name served on the HTTP side.
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::Licenses => "licenses.csv",
            Dataset::Backupsets => "backupsets.csv",
            Dataset::Groups => "groups.csv",
        }
    }

    /// Export endpoint on the portal, relative to the portal base URL.
    pub fn export_path(&self) -> &'static str {
        match self {
            Dataset::Licenses => "/export/licenses",
            Dataset::Backupsets => "/export/backupsets",
            Dataset::Groups => "/export/groups",
        }
    }

    /// `Content-Disposition` value for the download response.
    pub fn content_disposition(&self) -> &'static str {
        match self {
            Dataset::Licenses => "attachment; filename=licenses.csv",
            Dataset::Backupsets => "attachment; filename=backupsets.csv",
            Dataset::Groups => "attachment; filename=groups.csv",
        }
    }
}

// == Transform Dispatch ==
/// Reshapes one raw portal export into the published CSV text.
pub fn transform(dataset: Dataset, raw: &str) -> Result<String> {
    match dataset {
        Dataset::Licenses => licenses::transform(raw),
        Dataset::Backupsets => backupsets::transform(raw),
        Dataset::Groups => groups::transform(raw),
    }
}

// == Shared Helpers ==

/// Reader for the portal's semicolon-delimited exports.
fn semicolon_reader(raw: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(raw.as_bytes())
}

/// Finishes a writer and returns the produced CSV text.
fn into_csv_text(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Parses a numeric cell, accepting a decimal comma ("12,5" -> 12.5).
fn parse_decimal(column: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| ExporterError::InvalidNumber {
            column,
            value: value.to_string(),
        })
}

/// Normalizes a percentage-like cell: the literal "Unknown" counts as 0, a
/// trailing "%" is stripped, and a decimal comma is accepted.
fn normalize_percentage(column: &'static str, value: &str) -> Result<f64> {
    if value == "Unknown" {
        return Ok(0.0);
    }
    parse_decimal(column, value.trim().trim_end_matches('%'))
}

/// Usage percentage, numerator/denominator*100 rounded to 1 decimal place.
///
/// A zero denominator yields inf (or NaN for 0/0), serialized as-is.
fn ratio(numerator: f64, denominator: f64) -> String {
    let percent = numerator / denominator * 100.0;
    format!("{:.1}", (percent * 10.0).round() / 10.0)
}
