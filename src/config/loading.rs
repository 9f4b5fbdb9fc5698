use config::{Config, ConfigError, Environment};
use log::info;
use snafu::Snafu;

use super::models::Settings;

/// Load settings from `CUPSLP_*` environment variables, e.g.
/// `CUPSLP_TOOLS_LPSTAT=/usr/local/bin/lpstat`. Anything unset falls back to
/// the stock CUPS program names.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
    // As Rust has no native support for .env files,
    // we use the dotenv_flow crate to import to actual ENV vars.
    if let Ok(dotenv_path) = dotenv_flow::dotenv_flow() {
        info!("Loaded dotenv file: {:?}", dotenv_path);
    }

    let config = Config::builder()
        .add_source(Environment::default()
            .prefix("CUPSLP")
            .separator("_")
            .prefix_separator("_")
            .try_parsing(true))
            .set_default("tools.lpstat", "lpstat")?
            .set_default("tools.lpoptions", "lpoptions")?
            .set_default("tools.lp", "lp")?
            .set_default("tools.cancel", "cancel")?
        .build()?;

    Ok(config.try_deserialize()?)
}

// ////// //
// Errors //
// ////// //

#[derive(Debug, Snafu)]
pub enum ConfigLoadError {
    #[snafu(context(false), display("Could not load settings"))]
    Config { source: ConfigError },
}
