//! Groups Transform
//!
//! Portal export columns kept: Group, Quota, Used, Members. A usage ratio
//! is derived from the used volume against the quota.

use serde::Deserialize;

use super::{into_csv_text, parse_decimal, ratio, semicolon_reader};
use crate::error::Result;

/// Localized output header, in column order.
const OUTPUT_HEADERS: [&str; 5] = [
    "Groupe",
    "Quota (Go)",
    "Utilisé (Go)",
    "Membres",
    "Ratio",
];

#[derive(Debug, Deserialize)]
struct GroupRow {
    #[serde(rename = "Group")]
    group: String,
    #[serde(rename = "Quota")]
    quota: String,
    #[serde(rename = "Used")]
    used: String,
    #[serde(rename = "Members")]
    members: String,
}

/// Reshapes the groups export. Quota and used volume accept decimal commas.
pub fn transform(raw: &str) -> Result<String> {
    let mut reader = semicolon_reader(raw);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(OUTPUT_HEADERS)?;

    for record in reader.deserialize() {
        let row: GroupRow = record?;

        let quota = parse_decimal("Quota", &row.quota)?;
        let used = parse_decimal("Used", &row.used)?;

        writer.write_record(&[
            row.group,
            quota.to_string(),
            used.to_string(),
            row.members,
            ratio(used, quota),
        ])?;
    }

    into_csv_text(writer)
}
