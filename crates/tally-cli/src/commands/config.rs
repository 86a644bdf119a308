use crate::app::AppContext;
use crate::cli::{ConfigArgs, ConfigSubcommand};
use crate::config::{resolve_config_path, write_config, TallyConfig};
use crate::errors::CliError;
use crate::output::print_json;
use crate::ui::{hint, print, receipt};

pub fn handle_config(ctx: &AppContext, args: &ConfigArgs) -> anyhow::Result<()> {
    match &args.command {
        ConfigSubcommand::Path => handle_path(ctx),
        ConfigSubcommand::Show => handle_show(ctx),
        ConfigSubcommand::Init { force } => handle_init(ctx, *force),
    }
}

fn handle_path(ctx: &AppContext) -> anyhow::Result<()> {
    let path = resolve_config_path(ctx.cli().config.as_deref())?;
    println!("{}", path.display());
    Ok(())
}

fn handle_show(ctx: &AppContext) -> anyhow::Result<()> {
    let config = ctx.config()?;
    if ctx.ui().mode.is_json() {
        return print_json(&serde_json::to_value(config)?);
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    print!("{}", contents);
    Ok(())
}

fn handle_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = resolve_config_path(ctx.cli().config.as_deref())?;
    if path.exists() && !force {
        return Err(CliError::invalid_input(format!(
            "Config file already exists: {}\nHint: Pass --force to overwrite it.",
            path.display()
        ))
        .into());
    }

    write_config(&path, &TallyConfig::default())?;
    tracing::info!(path = %path.display(), "wrote default config");

    let ui = ctx.ui();
    if ui.mode.is_json() {
        return print_json(&serde_json::json!({ "path": path }));
    }
    if ui.chatty() {
        print(
            ui,
            &receipt(ui, "Config written", &[("Path", path.display().to_string())]),
        );
        print(ui, &hint(ui, "Edit the file to change defaults."));
    }
    Ok(())
}
