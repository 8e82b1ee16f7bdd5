mod helpers;

use ensdns_application::use_cases::UploadZoneUseCase;
use ensdns_domain::{namehash, Address, DomainError, ZoneUpload};
use helpers::MockRecordSink;
use std::sync::Arc;

const REGISTRY_HEX: &str = "314159265dd8dbb310642f98f50c066173c1259b";

fn registry() -> Address {
    REGISTRY_HEX.parse().unwrap()
}

fn resolver() -> Address {
    "0x5ffc014343cd971b7eb70732021e26c35b744cc4".parse().unwrap()
}

fn upload(nameserver: &str) -> ZoneUpload {
    ZoneUpload {
        apex: "example.eth.".to_string(),
        soa_nameserver: nameserver.to_string(),
        packed_records: vec![1, 2, 3, 4],
        record_count: 2,
    }
}

#[tokio::test]
async fn test_upload_writes_to_registered_resolver() {
    let sink = Arc::new(MockRecordSink::new());
    sink.set_resolver(registry(), namehash("example.eth."), resolver());

    let use_case = UploadZoneUseCase::new(sink.clone(), ".ens.domains.");
    let receipt = use_case
        .execute(&upload(&format!("{REGISTRY_HEX}.ens.domains.")))
        .await
        .unwrap();

    assert_eq!(receipt.registry, registry());
    assert_eq!(receipt.resolver, resolver());
    assert_eq!(receipt.node, namehash("example.eth"));

    let writes = sink.writes();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0].0, resolver());
    assert_eq!(writes[0].2, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_upload_rejects_foreign_nameserver() {
    let sink = Arc::new(MockRecordSink::new());
    let use_case = UploadZoneUseCase::new(sink.clone(), ".ens.domains.");

    let result = use_case.execute(&upload("ns1.example.com.")).await;

    assert!(matches!(
        result,
        Err(DomainError::UnrecognizedNameserver(_))
    ));
    assert!(sink.writes().is_empty());
}

#[tokio::test]
async fn test_upload_rejects_short_address_label() {
    let sink = Arc::new(MockRecordSink::new());
    let use_case = UploadZoneUseCase::new(sink, ".ens.domains.");

    let result = use_case.execute(&upload("deadbeef.ens.domains.")).await;

    assert!(matches!(result, Err(DomainError::InvalidRegistryLabel(_))));
}

#[tokio::test]
async fn test_upload_requires_resolver() {
    let sink = Arc::new(MockRecordSink::new());
    let use_case = UploadZoneUseCase::new(sink.clone(), ".ens.domains.");

    let result = use_case
        .execute(&upload(&format!("{REGISTRY_HEX}.ens.domains.")))
        .await;

    assert!(matches!(result, Err(DomainError::ResolverNotSet(_))));
    assert!(sink.writes().is_empty());
}

#[tokio::test]
async fn test_upload_propagates_write_failure() {
    let sink = Arc::new(MockRecordSink::failing_writes());
    sink.set_resolver(registry(), namehash("example.eth."), resolver());
    let use_case = UploadZoneUseCase::new(sink, ".ens.domains.");

    let result = use_case
        .execute(&upload(&format!("{REGISTRY_HEX}.ens.domains.")))
        .await;

    assert!(matches!(result, Err(DomainError::Rpc(_))));
}
