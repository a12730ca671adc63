//! Backup Sets Transform
//!
//! Portal export columns kept: Customer, Backup set, Last backup, Size,
//! Status. Rows whose status is exactly "Ok" are healthy and dropped; only
//! sets needing attention are published.

use serde::Deserialize;

use super::{into_csv_text, semicolon_reader};
use crate::error::Result;

/// Localized output header, in column order.
const OUTPUT_HEADERS: [&str; 5] = [
    "Client",
    "Jeu de sauvegarde",
    "Dernière sauvegarde",
    "Taille",
    "Statut",
];

#[derive(Debug, Deserialize)]
struct BackupSetRow {
    #[serde(rename = "Customer")]
    customer: String,
    #[serde(rename = "Backup set")]
    backup_set: String,
    #[serde(rename = "Last backup")]
    last_backup: String,
    #[serde(rename = "Size")]
    size: String,
    #[serde(rename = "Status")]
    status: String,
}

/// Reshapes the backup sets export, keeping only non-"Ok" rows.
///
/// The match is exact: "OK", "ok" and other spellings are kept.
pub fn transform(raw: &str) -> Result<String> {
    let mut reader = semicolon_reader(raw);
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(OUTPUT_HEADERS)?;

    for record in reader.deserialize() {
        let row: BackupSetRow = record?;

        if row.status == "Ok" {
            continue;
        }

        writer.write_record(&[
            row.customer,
            row.backup_set,
            row.last_backup,
            row.size,
            row.status,
        ])?;
    }

    into_csv_text(writer)
}
