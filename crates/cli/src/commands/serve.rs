use crate::di::DnsServices;
use crate::server::{start_dns_server, CacheStatsJob};
use ensdns_domain::Config;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let socket_addr = config.server.socket_addr()?;
    let services = DnsServices::build(&config)?;
    info!(cache_capacity = services.cache.capacity(), "Resolution cache ready");

    CacheStatsJob::new(Arc::clone(&services.cache))
        .with_interval(config.cache.stats_interval_secs)
        .start();

    start_dns_server(
        socket_addr,
        services.handler,
        Duration::from_secs(config.server.tcp_timeout),
    )
    .await
}
