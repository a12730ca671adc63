//! Licenses Transform
//!
//! Portal export columns kept: Customer, License, Quota, Externalized
//! storage, Usage, Status. The usage and status cells are normalized and a
//! usage ratio is derived from externalized storage against the quota.

use serde::Deserialize;

use super::{into_csv_text, normalize_percentage, parse_decimal, ratio, semicolon_reader};
use crate::error::Result;

/// Localized output header, in column order.
const OUTPUT_HEADERS: [&str; 7] = [
    "Client",
    "Licence",
    "Quota (Go)",
    "Stockage externalisé (Go)",
    "Utilisation (%)",
    "Statut",
    "Ratio",
];

#[derive(Debug, Deserialize)]
struct LicenseRow {
    #[serde(rename = "Customer")]
    customer: String,
    #[serde(rename = "License")]
    license: String,
    #[serde(rename = "Quota")]
    quota: String,
    #[serde(rename = "Externalized storage")]
    externalized_storage: String,
    #[serde(rename = "Usage")]
    usage: String,
    #[serde(rename = "Status")]
    status: String,
}

/// Reshapes the licenses export.
///
/// The usage cell may be the literal "Unknown" (treated as 0) or a
/// "%"-suffixed decimal-comma percentage; the status cell carries a stray
/// "%" that is stripped.
pub fn transform(raw: &str) -> Result<String> {
    let mut reader = semicolon_reader(raw);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(OUTPUT_HEADERS)?;

    for record in reader.deserialize() {
        let row: LicenseRow = record?;

        let quota = parse_decimal("Quota", &row.quota)?;
        let externalized = parse_decimal("Externalized storage", &row.externalized_storage)?;
        let usage = normalize_percentage("Usage", &row.usage)?;

        writer.write_record(&[
            row.customer,
            row.license,
            quota.to_string(),
            externalized.to_string(),
            usage.to_string(),
            row.status.trim_end_matches('%').to_string(),
            ratio(externalized, quota),
        ])?;
    }

    into_csv_text(writer)
}
