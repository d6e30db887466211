use crate::audit::{AuditEventType, AuditRecord, AuditTracker};
use crate::types::CustodianId;

#[test]
fn test_audit_log_adds_and_retrieves() {
    let tracker = AuditTracker::new(10);

    tracker.log(AuditRecord::new(
        AuditEventType::Registration,
        Some(CustodianId::from("alice")),
        "Registered alice",
    ));

    let recent = tracker.recent(1);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].custodian_id, Some(CustodianId::from("alice")));
    assert_eq!(recent[0].message, "Registered alice");
    assert_eq!(recent[0].event_type, AuditEventType::Registration);
}

#[test]
fn test_audit_log_eviction() {
    let tracker = AuditTracker::new(3);

    for i in 0..5 {
        tracker.log(AuditRecord::new(
            AuditEventType::Submission,
            Some(CustodianId(format!("custodian_{}", i))),
            format!("Share from #{}", i),
        ));
    }

    let recent = tracker.recent(5);
    assert_eq!(recent.len(), 3); // oldest two evicted
    assert_eq!(recent[0].custodian_id, Some(CustodianId::from("custodian_4")));
    assert_eq!(recent[2].custodian_id, Some(CustodianId::from("custodian_2")));
}

#[test]
fn test_audit_log_zero_capacity_keeps_latest() {
    let tracker = AuditTracker::new(0);
    assert_eq!(tracker.capacity(), 1);

    tracker.log(AuditRecord::new(AuditEventType::Rejection, None, "first"));
    tracker.log(AuditRecord::new(AuditEventType::Rejection, None, "second"));

    let recent = tracker.recent(10);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].message, "second");
}

#[test]
fn test_audit_log_thread_safety() {
    use std::thread;

    let tracker = AuditTracker::new(100);

    thread::scope(|s| {
        for i in 0..10 {
            let tracker = &tracker;
            s.spawn(move || {
                tracker.log(AuditRecord::new(
                    AuditEventType::Submission,
                    Some(CustodianId(format!("thread_{}", i))),
                    format!("Thread submit event {}", i),
                ));
            });
        }
    });

    let recent = tracker.recent(10);
    assert_eq!(recent.len(), 10);
    assert_eq!(tracker.len(), 10);
}

#[test]
fn test_audit_event_ids_are_unique() {
    let tracker = AuditTracker::new(10);
    tracker.log(AuditRecord::new(AuditEventType::Registration, None, "a"));
    tracker.log(AuditRecord::new(AuditEventType::Registration, None, "b"));

    let recent = tracker.recent(2);
    assert_ne!(recent[0].event_id, recent[1].event_id);
}
