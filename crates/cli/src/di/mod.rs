use ensdns_domain::Config;
use ensdns_infrastructure::chain::{EthRpcRecordSource, JsonRpcClient};
use ensdns_infrastructure::dns::cache::ResolutionCache;
use ensdns_infrastructure::dns::discovery::RegistryDiscovery;
use ensdns_infrastructure::dns::server::DnsServerHandler;
use ensdns_infrastructure::dns::transport::UdpTransport;
use ensdns_infrastructure::dns::zone::ZoneLoader;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Everything the `serve` command wires together.
pub struct DnsServices {
    pub cache: Arc<ResolutionCache>,
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let capacity = NonZeroUsize::new(config.cache.max_entries)
            .ok_or_else(|| anyhow::anyhow!("cache size must be greater than zero"))?;
        let cache = Arc::new(ResolutionCache::new(capacity));

        let mut roots = config.registry.root_servers.clone();
        fastrand::shuffle(&mut roots);
        info!(roots = ?roots, "Root server order");

        let discovery = Arc::new(RegistryDiscovery::new(
            Arc::new(UdpTransport::new()),
            Arc::from(roots),
            config.registry.normalized_ns_domain(),
            Duration::from_millis(config.registry.query_timeout),
        ));

        let source = EthRpcRecordSource::new(JsonRpcClient::new(&config.registry.rpc_url)?);
        let loader = Arc::new(ZoneLoader::new(Arc::new(source)));

        let handler = DnsServerHandler::new(Arc::clone(&cache), discovery, loader);

        Ok(Self { cache, handler })
    }
}
