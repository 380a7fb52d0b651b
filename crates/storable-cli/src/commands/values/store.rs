use std::io::{self, IsTerminal, Read};

use serde_json::Value;
use storable_core::{Storable, StorableError, StorableRecord, StorableSequence};
use tracing::debug;

use crate::app::AppContext;
use crate::cli::StoreArgs;

use super::parse_tier;

pub fn handle_store(ctx: &AppContext, args: &StoreArgs) -> anyhow::Result<()> {
    let tier = parse_tier(&args.tier)?;
    let raw = match &args.value {
        Some(value) => value.clone(),
        None => read_stdin()?,
    };
    let payload: Value = serde_json::from_str(raw.trim()).map_err(|e| {
        StorableError::InvalidArgument(format!("Value is not valid JSON: {}", e))
    })?;

    let mut storage = ctx.open_storage()?;
    let shape = match payload {
        Value::Object(fields) => {
            StorableRecord::new(fields).store(&mut storage, &args.key, tier)?;
            "record"
        }
        Value::Array(items) => {
            StorableSequence::new(items).store(&mut storage, &args.key, tier)?;
            "sequence"
        }
        _ => {
            return Err(StorableError::InvalidArgument(
                "Only JSON objects and arrays can be stored; wrap scalars in [ ]".to_string(),
            )
            .into())
        }
    };
    debug!(key = %args.key, %tier, shape, "stored from cli");

    if !ctx.quiet() {
        println!("Stored {} \"{}\" in {} storage", shape, args.key, tier);
    }
    Ok(())
}

fn read_stdin() -> anyhow::Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(StorableError::InvalidArgument(
            "No value given. Pass JSON as an argument or pipe it on stdin.".to_string(),
        )
        .into());
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}
