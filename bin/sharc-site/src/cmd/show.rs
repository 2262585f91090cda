//! Show command - print the resolved configuration

use std::path::Path;

use color_eyre::eyre::Result;

use super::resolve_config;

/// Render the resolved configuration as JSON for the external generator.
pub fn render(config_path: Option<&Path>, pretty: bool) -> Result<String> {
    let config = resolve_config(config_path)?;
    tracing::debug!(?config, "Resolved configuration");

    let json = if pretty {
        config.to_json_pretty()?
    } else {
        config.to_json()?
    };
    Ok(json)
}

/// Run the show command.
pub fn run(config_path: Option<&Path>, pretty: bool) -> Result<()> {
    println!("{}", render(config_path, pretty)?);
    Ok(())
}
