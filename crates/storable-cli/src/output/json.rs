//! JSON output formatting for stored values.

use serde_json::Value;

use super::text::ListingRow;

/// Print a retrieved payload to stdout.
pub fn print_value(value: &Value, pretty: bool) -> anyhow::Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}

/// Convert listing rows to a JSON array for output.
pub fn listing_json(rows: &[ListingRow]) -> Value {
    Value::Array(
        rows.iter()
            .map(|row| {
                serde_json::json!({
                    "tier": row.tier,
                    "key": row.key,
                    "shape": row.shape,
                    "bytes": row.bytes,
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storable_core::StorageTier;

    #[test]
    fn test_listing_json_fields() {
        let rows = vec![ListingRow {
            tier: StorageTier::Session,
            key: "ids".to_string(),
            shape: "sequence",
            bytes: 17,
        }];
        let json = listing_json(&rows);
        assert_eq!(
            json,
            serde_json::json!([{"tier": "session", "key": "ids", "shape": "sequence", "bytes": 17}])
        );
    }
}
