use ensdns_domain::Address;
use ensdns_infrastructure::dns::zone::pack_records;
use hickory_proto::rr::rdata::{A, CNAME, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use std::str::FromStr;

pub const REGISTRY_NS: &str = "314159265dd8dbb310642f98f50c066173c1259b.ens.domains.";
pub const OTHER_REGISTRY_NS: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa.ens.domains.";
pub const NS_DOMAIN: &str = ".ens.domains.";

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn registry() -> Address {
    Address::from_nameserver(REGISTRY_NS).unwrap()
}

pub fn other_registry() -> Address {
    Address::from_nameserver(OTHER_REGISTRY_NS).unwrap()
}

pub fn resolver() -> Address {
    Address::new([0x22; 20])
}

pub fn soa(apex: &str, refresh: i32) -> Record {
    Record::from_rdata(
        name(apex),
        3600,
        RData::SOA(SOA::new(
            name(REGISTRY_NS),
            name(&format!("hostmaster.{apex}")),
            1,
            refresh,
            600,
            86400,
            60,
        )),
    )
}

pub fn a(owner: &str, ip: [u8; 4]) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(Ipv4Addr::from(ip))))
}

pub fn cname(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn ns(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 3600, RData::NS(NS(name(target))))
}

/// Packed records for `example.eth.`: apex SOA and NS, `www` A, `alias` CNAME.
pub fn example_zone_blob(refresh: i32) -> Vec<u8> {
    pack_records(&[
        soa("example.eth.", refresh),
        ns("example.eth.", REGISTRY_NS),
        a("www.example.eth.", [192, 0, 2, 10]),
        cname("alias.example.eth.", "www.example.eth."),
    ])
    .unwrap()
}

pub fn root_servers(servers: &[&str]) -> std::sync::Arc<[String]> {
    servers.iter().map(|s| s.to_string()).collect()
}
