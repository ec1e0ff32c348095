use super::*;

#[test]
fn fresh_ticket_is_current() {
    let seq = RequestSequence::new();
    let ticket = seq.begin();
    assert!(ticket.is_current());
}

#[test]
fn newer_request_invalidates_older_ticket() {
    let seq = RequestSequence::new();
    let first = seq.begin();
    let second = seq.begin();
    assert!(!first.is_current());
    assert!(second.is_current());
}

#[test]
fn tickets_from_independent_sequences_do_not_interfere() {
    let errors = RequestSequence::new();
    let alerts = RequestSequence::new();
    let e = errors.begin();
    let _ = alerts.begin();
    let _ = alerts.begin();
    assert!(e.is_current());
}

#[test]
fn cloned_ticket_tracks_the_same_sequence() {
    let seq = RequestSequence::new();
    let ticket = seq.begin();
    let clone = ticket.clone();
    let _ = seq.begin();
    assert!(!ticket.is_current());
    assert!(!clone.is_current());
}
