use ensdns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        listen = %config.server.listen_address,
        ns_domain = %config.registry.normalized_ns_domain(),
        rpc_url = %config.registry.rpc_url,
        cache_entries = config.cache.max_entries,
        "Configuration loaded"
    );
}
