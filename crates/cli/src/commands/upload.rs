use ensdns_application::use_cases::UploadZoneUseCase;
use ensdns_domain::Config;
use ensdns_infrastructure::chain::{EthRpcRecordSource, JsonRpcClient};
use ensdns_infrastructure::zonefile::ZoneFile;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Publishes the zone in `zonefile` to the registry its SOA names.
///
/// `account` is an address or an index into the node's account list; the
/// node signs the transaction, after unlocking with `password` if given.
pub async fn upload(
    config: Config,
    zonefile: &Path,
    account: &str,
    password: Option<&str>,
) -> anyhow::Result<()> {
    let zone = ZoneFile::read(zonefile)?;
    let zone_upload = zone.to_upload()?;

    info!(
        zonefile = %zonefile.display(),
        apex = %zone_upload.apex,
        records = zone_upload.record_count,
        bytes = zone_upload.packed_records.len(),
        "Zone file read"
    );

    let source = EthRpcRecordSource::new(JsonRpcClient::new(&config.registry.rpc_url)?);
    let sender = source.resolve_account(account).await?;
    if let Some(password) = password {
        source.unlock(&sender, password).await?;
    }

    let use_case = UploadZoneUseCase::new(
        Arc::new(source.with_sender(sender)),
        config.registry.normalized_ns_domain(),
    );
    let receipt = use_case.execute(&zone_upload).await?;

    info!(
        apex = %zone_upload.apex,
        registry = %receipt.registry,
        resolver = %receipt.resolver,
        tx = %receipt.transaction,
        "Zone uploaded"
    );
    println!("{}", receipt.transaction);

    Ok(())
}
