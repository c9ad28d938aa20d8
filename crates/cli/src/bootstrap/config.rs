use tracing::info;
use vigil_dns_domain::config::{CliOverrides, Config, ConfigError};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> Result<Config, ConfigError> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        listen_port = config.server.listen_port,
        bind = %config.server.bind_address,
        upstream = %config.upstream.server,
        filter = %config.filter.path,
        "Configuration loaded"
    );

    Ok(config)
}
