//! `subsync config` handlers.

use anyhow::Result;

use subsync::Config;

/// Show the effective configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR (defaults to 'vi'); creates the file first if needed.
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
