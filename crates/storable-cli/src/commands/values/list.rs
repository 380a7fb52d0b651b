use storable_core::{KeyValueStore, StorageTier};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{describe_stored, listing_json, print_listing, ListingRow};

use super::parse_tier;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let tiers = match args.tier.as_deref() {
        Some(value) => vec![parse_tier(value)?],
        None => StorageTier::ALL.to_vec(),
    };
    let storage = ctx.open_storage()?;

    let mut rows = Vec::new();
    for tier in tiers {
        let store = storage.tier(tier);
        for key in store.keys()? {
            let text = store.get(&key)?.unwrap_or_default();
            rows.push(ListingRow {
                tier,
                shape: describe_stored(&text),
                bytes: text.len(),
                key,
            });
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing_json(&rows))?);
        return Ok(());
    }

    if rows.is_empty() {
        if !ctx.quiet() {
            println!("No stored values.");
        }
        return Ok(());
    }
    print_listing(&rows);
    Ok(())
}
