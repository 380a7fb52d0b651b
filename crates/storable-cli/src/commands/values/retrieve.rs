use serde_json::Value;
use storable_core::storage::KeyValueStore;
use storable_core::{Storable, StorableError, StorableRecord, StorableSequence, StorageTier};

use crate::app::AppContext;
use crate::cli::{RetrieveArgs, Shape};
use crate::output::print_value;

use super::parse_tier;

pub fn handle_retrieve(ctx: &AppContext, args: &RetrieveArgs) -> anyhow::Result<()> {
    let tier = parse_tier(&args.tier)?;
    let storage = ctx.open_storage()?;

    let value = match args.shape {
        Shape::Record => record(&storage, &args.key, tier)?,
        Shape::Sequence => sequence(&storage, &args.key, tier)?,
        Shape::Auto => match record(&storage, &args.key, tier) {
            Err(StorableError::Deserialization(first)) => sequence(&storage, &args.key, tier)
                .map_err(|_| StorableError::Deserialization(first))?,
            other => other?,
        },
    };

    print_value(&value, args.pretty)
}

fn record<D, S>(
    storage: &storable_core::TieredStorage<D, S>,
    key: &str,
    tier: StorageTier,
) -> storable_core::Result<Value>
where
    D: KeyValueStore,
    S: KeyValueStore,
{
    StorableRecord::retrieve(storage, key, tier).map(|r| Value::Object(r.into_inner()))
}

fn sequence<D, S>(
    storage: &storable_core::TieredStorage<D, S>,
    key: &str,
    tier: StorageTier,
) -> storable_core::Result<Value>
where
    D: KeyValueStore,
    S: KeyValueStore,
{
    StorableSequence::retrieve(storage, key, tier).map(|s| Value::Array(s.into_inner()))
}
