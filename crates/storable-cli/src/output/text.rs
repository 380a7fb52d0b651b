//! Text and table output formatting for key listings.

use std::io::IsTerminal;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde_json::Value;
use storable_core::StorageTier;

/// One stored key as shown by `storable list`.
#[derive(Debug, Clone)]
pub struct ListingRow {
    pub tier: StorageTier,
    pub key: String,
    pub shape: &'static str,
    pub bytes: usize,
}

/// Classify stored text for display without restoring a type.
pub fn describe_stored(text: &str) -> &'static str {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => match (fields.len(), fields.get("value")) {
            (1, Some(Value::Array(_))) => "sequence",
            (1, Some(Value::Object(_))) => "record",
            _ => "object",
        },
        Ok(_) => "other",
        Err(_) => "invalid",
    }
}

pub fn print_listing(rows: &[ListingRow]) {
    if rows.is_empty() {
        return;
    }

    if std::io::stdout().is_terminal() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Tier", "Key", "Shape", "Bytes"]);
        for row in rows {
            table.add_row(vec![
                row.tier.to_string(),
                row.key.clone(),
                row.shape.to_string(),
                row.bytes.to_string(),
            ]);
        }
        println!("{}", table);
    } else {
        for row in rows {
            println!("{} {} {} {}", row.tier, row.key, row.shape, row.bytes);
        }
    }
}
