use flowrelay_backend::services::session::resolve;

use std::collections::HashSet;

#[test]
fn caller_supplied_id_is_returned_unchanged() {
    assert_eq!(resolve(Some("sess-42")), "sess-42");
    // Opaque token: no trimming, no reformatting.
    assert_eq!(resolve(Some(" padded ")), " padded ");
}

#[test]
fn absent_id_mints_a_non_empty_one() {
    let id = resolve(None);
    assert!(!id.is_empty());
}

#[test]
fn blank_id_counts_as_absent() {
    let id = resolve(Some("   "));
    assert!(!id.is_empty());
    assert_ne!(id.trim(), "");
}

#[test]
fn minted_ids_do_not_collide_in_practice() {
    let ids: HashSet<String> = (0..1000).map(|_| resolve(None)).collect();
    assert_eq!(ids.len(), 1000);
}
