use crate::app::{resolve_config_path, AppContext};
use crate::config::{write_config, StorableConfig};

pub fn handle_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let config_path = resolve_config_path(ctx.cli())?;
    let paths = ctx.paths()?;

    if json {
        let output = serde_json::json!({
            "config": config_path,
            "config_exists": config_path.exists(),
            "durable": paths.durable,
            "session": paths.session,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let marker = if config_path.exists() { "" } else { " (not created)" };
    println!("config:  {}{}", config_path.display(), marker);
    println!("durable: {}", paths.durable.display());
    println!("session: {}", paths.session.display());
    Ok(())
}

pub fn handle_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let config_path = resolve_config_path(ctx.cli())?;
    if config_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ));
    }

    let paths = ctx.paths()?;
    let config = StorableConfig::new(paths.durable.clone(), paths.session.clone());
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        println!("Wrote config to {}", config_path.display());
    }
    Ok(())
}
