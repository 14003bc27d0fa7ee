use super::*;

#[test]
fn fresh_ticket_is_current() {
    let tracker = RequestTracker::new();
    let ticket = tracker.begin();
    assert!(tracker.is_current(ticket));
}

#[test]
fn newer_request_supersedes_older_ticket() {
    let tracker = RequestTracker::new();
    let first = tracker.begin();
    let second = tracker.begin();
    assert!(!tracker.is_current(first));
    assert!(tracker.is_current(second));
}

#[test]
fn cancel_invalidates_outstanding_ticket() {
    let tracker = RequestTracker::new();
    let ticket = tracker.begin();
    tracker.cancel();
    assert!(!tracker.is_current(ticket));
}

#[test]
fn clones_share_generation() {
    let tracker = RequestTracker::new();
    let ticket = tracker.begin();
    let cleanup_handle = tracker.clone();
    cleanup_handle.cancel();
    assert!(!tracker.is_current(ticket));
}
