use crate::crypto::sha256_hex;
use crate::ledger::ShareLedger;
use crate::types::{CustodianId, ShareRecord};

fn record(custodian: &str, data: &str) -> ShareRecord {
    ShareRecord {
        custodian_id: CustodianId::from(custodian),
        share_data: data.to_string(),
        share_hash: sha256_hex(data),
        timestamp: None,
    }
}

#[test]
fn test_empty_ledger() {
    let ledger = ShareLedger::new();
    assert!(ledger.is_empty());
    assert!(ledger.list_all().is_empty());
}

#[test]
fn test_append_returns_running_count_and_keeps_order() {
    let ledger = ShareLedger::new();
    assert_eq!(ledger.append(record("alice", "s1")), 1);
    assert_eq!(ledger.append(record("bob", "s2")), 2);
    assert_eq!(ledger.append(record("alice", "s3")), 3);

    let data: Vec<String> = ledger.list_all().into_iter().map(|r| r.share_data).collect();
    assert_eq!(data, vec!["s1", "s2", "s3"]);
}

#[test]
fn test_snapshot_is_not_affected_by_later_appends() {
    let ledger = ShareLedger::new();
    ledger.append(record("alice", "s1"));
    let before = ledger.list_all();

    ledger.append(record("bob", "s2"));
    let after = ledger.list_all();

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
    assert_eq!(before[0], after[0]);
}

#[test]
fn test_records_for_filters_by_custodian() {
    let ledger = ShareLedger::new();
    ledger.append(record("alice", "s1"));
    ledger.append(record("bob", "s2"));
    ledger.append(record("alice", "s3"));

    let alice = ledger.records_for(&CustodianId::from("alice"));
    assert_eq!(alice.len(), 2);
    assert_eq!(alice[0].share_data, "s1");
    assert_eq!(alice[1].share_data, "s3");
    assert!(ledger.records_for(&CustodianId::from("carol")).is_empty());
}

#[test]
fn test_stamped_appends_are_monotonic() {
    let ledger = ShareLedger::new();
    for i in 0..20 {
        ledger.append_stamped(record("alice", &format!("s{i}")));
    }

    let stamps: Vec<_> = ledger
        .list_all()
        .into_iter()
        .map(|r| r.timestamp.expect("stamped"))
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_concurrent_appends_lose_nothing() {
    let ledger = ShareLedger::new();

    std::thread::scope(|s| {
        for t in 0..8 {
            let ledger = &ledger;
            s.spawn(move || {
                for i in 0..50 {
                    ledger.append(record(&format!("c{t}"), &format!("{t}-{i}")));
                }
            });
        }
    });

    assert_eq!(ledger.len(), 400);
    // per-thread order is preserved even though threads interleave
    for t in 0..8 {
        let mine: Vec<String> = ledger
            .records_for(&CustodianId(format!("c{t}")))
            .into_iter()
            .map(|r| r.share_data)
            .collect();
        let expected: Vec<String> = (0..50).map(|i| format!("{t}-{i}")).collect();
        assert_eq!(mine, expected);
    }
}
