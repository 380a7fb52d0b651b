use storable_core::{Storable, StorableError, StorableRecord};

use crate::app::AppContext;
use crate::cli::RemoveArgs;

use super::parse_tier;

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let tier = parse_tier(&args.tier)?;
    let mut storage = ctx.open_storage()?;

    // Removal does not depend on the payload type.
    if !StorableRecord::remove(&mut storage, &args.key, tier)? {
        return Err(StorableError::NotFound(format!(
            "key \"{}\" in {} storage",
            args.key, tier
        ))
        .into());
    }

    if !ctx.quiet() {
        println!("Removed \"{}\" from {} storage", args.key, tier);
    }
    Ok(())
}
