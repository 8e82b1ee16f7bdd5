use compact_str::CompactString;
use ensdns_domain::DomainError;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::time::Duration;

const WILDCARD_LABEL: &str = "*";

/// One label position in a zone.
#[derive(Debug, Default)]
struct ZoneNode {
    records: Vec<Record>,
    children: HashMap<CompactString, ZoneNode, FxBuildHasher>,
}

/// Records of one domain arranged as a reversed-label trie.
///
/// `www.example.eth.` is stored at root → "eth" → "example" → "www".
/// Built once from the full record list and never mutated afterwards, so a
/// tree can be shared across concurrent queries behind an `Arc`.
#[derive(Debug)]
pub struct ZoneTree {
    root: ZoneNode,
    soa: Record,
    record_count: usize,
}

impl ZoneTree {
    /// Builds the tree. Fails unless the records contain exactly one SOA.
    pub fn build(records: Vec<Record>) -> Result<Self, DomainError> {
        let mut root = ZoneNode::default();
        let mut soa: Option<Record> = None;
        let record_count = records.len();

        for record in records {
            if record.record_type() == RecordType::SOA {
                if soa.is_some() {
                    return Err(DomainError::InvalidZone(format!(
                        "multiple SOA records (second at {})",
                        record.name()
                    )));
                }
                soa = Some(record.clone());
            }

            let mut node = &mut root;
            for label in reversed_labels(record.name()) {
                node = node.children.entry(label).or_default();
            }
            node.records.push(record);
        }

        let soa = soa.ok_or_else(|| DomainError::InvalidZone("no SOA record".to_string()))?;

        Ok(Self {
            root,
            soa,
            record_count,
        })
    }

    pub fn soa(&self) -> &Record {
        &self.soa
    }

    pub fn apex(&self) -> &Name {
        self.soa.name()
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// How long a fetched copy of this zone may be served: the SOA refresh.
    pub fn refresh_interval(&self) -> Duration {
        match self.soa.data() {
            RData::SOA(soa) => Duration::from_secs(u64::from(soa.refresh().max(0).unsigned_abs())),
            _ => Duration::ZERO,
        }
    }

    /// Answers `query_type` for `name`.
    ///
    /// Records are returned as copies renamed to `name`. When nothing of the
    /// requested type exists, and the type is neither CNAME nor ANY, the
    /// lookup is repeated once for CNAME.
    pub fn resolve(&self, name: &Name, query_type: RecordType) -> Vec<Record> {
        let answers = self.matching(name, query_type);
        if answers.is_empty() && query_type != RecordType::CNAME && query_type != RecordType::ANY {
            return self.matching(name, RecordType::CNAME);
        }
        answers
    }

    fn matching(&self, name: &Name, query_type: RecordType) -> Vec<Record> {
        let Some(node) = self.find_node(name) else {
            return Vec::new();
        };

        node.records
            .iter()
            .filter(|record| query_type == RecordType::ANY || record.record_type() == query_type)
            .map(|record| {
                let mut answer = record.clone();
                answer.set_name(name.clone());
                answer
            })
            .collect()
    }

    /// Descends label by label. A missing label falls back to the `*` child
    /// at that level, which ends the descent.
    fn find_node(&self, name: &Name) -> Option<&ZoneNode> {
        let mut node = &self.root;
        for label in reversed_labels(name) {
            match node.children.get(label.as_str()) {
                Some(child) => node = child,
                None => return node.children.get(WILDCARD_LABEL),
            }
        }
        Some(node)
    }
}

/// Lower-cased labels of `name`, rightmost first, empty labels skipped.
fn reversed_labels(name: &Name) -> Vec<CompactString> {
    let lowered = name.to_ascii().to_ascii_lowercase();
    lowered
        .split('.')
        .rev()
        .filter(|label| !label.is_empty())
        .map(CompactString::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::rdata::{A, CNAME, MX, SOA, TXT};
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    fn soa(owner: &str) -> Record {
        Record::from_rdata(
            name(owner),
            3600,
            RData::SOA(SOA::new(
                name("314159265dd8dbb310642f98f50c066173c1259b.ens.domains."),
                name("hostmaster.example.eth."),
                1,
                900,
                300,
                604800,
                60,
            )),
        )
    }

    fn a(owner: &str, ip: [u8; 4]) -> Record {
        Record::from_rdata(name(owner), 300, RData::A(A(Ipv4Addr::from(ip))))
    }

    fn cname(owner: &str, target: &str) -> Record {
        Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
    }

    fn zone(records: Vec<Record>) -> ZoneTree {
        ZoneTree::build(records).unwrap()
    }

    #[test]
    fn test_build_requires_soa() {
        let result = ZoneTree::build(vec![a("example.eth.", [1, 2, 3, 4])]);
        assert!(matches!(result, Err(DomainError::InvalidZone(_))));
    }

    #[test]
    fn test_build_rejects_second_soa() {
        let result = ZoneTree::build(vec![soa("example.eth."), soa("example.eth.")]);
        assert!(matches!(result, Err(DomainError::InvalidZone(_))));
    }

    #[test]
    fn test_refresh_interval_comes_from_soa() {
        let tree = zone(vec![soa("example.eth.")]);
        assert_eq!(tree.refresh_interval(), Duration::from_secs(900));
        assert_eq!(tree.apex(), &name("example.eth."));
    }

    #[test]
    fn test_any_at_apex_returns_every_apex_record() {
        let records = vec![
            soa("example.eth."),
            a("example.eth.", [10, 0, 0, 1]),
            a("example.eth.", [10, 0, 0, 2]),
            Record::from_rdata(
                name("example.eth."),
                300,
                RData::TXT(TXT::new(vec!["v=spf1 -all".to_string()])),
            ),
            Record::from_rdata(
                name("example.eth."),
                300,
                RData::MX(MX::new(10, name("mail.example.eth."))),
            ),
        ];
        let tree = zone(records.clone());

        let answers = tree.resolve(&name("example.eth."), RecordType::ANY);

        assert_eq!(answers.len(), records.len());
        for (answer, original) in answers.iter().zip(&records) {
            assert_eq!(answer.data(), original.data());
        }
    }

    #[test]
    fn test_exact_match_filters_by_type() {
        let tree = zone(vec![
            soa("example.eth."),
            a("www.example.eth.", [1, 1, 1, 1]),
            Record::from_rdata(
                name("www.example.eth."),
                300,
                RData::TXT(TXT::new(vec!["hello".to_string()])),
            ),
        ]);

        let answers = tree.resolve(&name("www.example.eth."), RecordType::A);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].record_type(), RecordType::A);
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_keeps_query_name() {
        let tree = zone(vec![soa("example.eth."), a("www.example.eth.", [1, 1, 1, 1])]);

        let query = Name::from_ascii("WWW.Example.ETH.").unwrap();
        let answers = tree.resolve(&query, RecordType::A);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].name().to_ascii(), "WWW.Example.ETH.");
    }

    #[test]
    fn test_wildcard_answers_under_query_name() {
        let tree = zone(vec![soa("example.eth."), a("*.example.eth.", [1, 2, 3, 4])]);

        let answers = tree.resolve(&name("foo.example.eth."), RecordType::A);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].name(), &name("foo.example.eth."));
        assert_eq!(answers[0].data(), &RData::A(A(Ipv4Addr::new(1, 2, 3, 4))));
    }

    #[test]
    fn test_wildcard_stops_descent() {
        // bar.foo.example.eth. falls onto *.example.eth. at the "foo" level
        // and is answered from the wildcard node itself.
        let tree = zone(vec![
            soa("example.eth."),
            a("*.example.eth.", [1, 2, 3, 4]),
            a("bar.other.example.eth.", [9, 9, 9, 9]),
        ]);

        let answers = tree.resolve(&name("bar.foo.example.eth."), RecordType::A);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].data(), &RData::A(A(Ipv4Addr::new(1, 2, 3, 4))));
    }

    #[test]
    fn test_exact_label_beats_wildcard() {
        let tree = zone(vec![
            soa("example.eth."),
            a("*.example.eth.", [1, 2, 3, 4]),
            a("www.example.eth.", [5, 6, 7, 8]),
        ]);

        let answers = tree.resolve(&name("www.example.eth."), RecordType::A);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].data(), &RData::A(A(Ipv4Addr::new(5, 6, 7, 8))));
    }

    #[test]
    fn test_missing_name_without_wildcard_is_empty() {
        let tree = zone(vec![soa("example.eth."), a("www.example.eth.", [1, 1, 1, 1])]);

        assert!(tree.resolve(&name("ftp.example.eth."), RecordType::A).is_empty());
        assert!(tree.resolve(&name("other.eth."), RecordType::A).is_empty());
    }

    #[test]
    fn test_falls_back_to_cname() {
        let tree = zone(vec![
            soa("example.eth."),
            cname("www.example.eth.", "example.eth."),
        ]);

        let answers = tree.resolve(&name("www.example.eth."), RecordType::AAAA);

        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].record_type(), RecordType::CNAME);
        assert_eq!(answers[0].name(), &name("www.example.eth."));
    }

    #[test]
    fn test_any_never_falls_back() {
        let tree = zone(vec![soa("example.eth."), a("www.example.eth.", [1, 1, 1, 1])]);

        assert!(tree.resolve(&name("ftp.example.eth."), RecordType::ANY).is_empty());
    }

    #[test]
    fn test_cname_query_does_not_retry() {
        let tree = zone(vec![soa("example.eth."), a("www.example.eth.", [1, 1, 1, 1])]);

        assert!(tree.resolve(&name("www.example.eth."), RecordType::CNAME).is_empty());
    }

    #[test]
    fn test_resolve_leaves_stored_records_untouched() {
        let tree = zone(vec![soa("example.eth."), a("*.example.eth.", [1, 2, 3, 4])]);

        tree.resolve(&name("foo.example.eth."), RecordType::A);
        let again = tree.resolve(&name("bar.example.eth."), RecordType::A);

        assert_eq!(again[0].name(), &name("bar.example.eth."));
        let stored = tree.resolve(&name("*.example.eth."), RecordType::A);
        assert_eq!(stored[0].name(), &name("*.example.eth."));
    }
}
