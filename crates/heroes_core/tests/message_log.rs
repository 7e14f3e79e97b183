use heroes_core::MessageLog;

#[test]
fn entries_keep_insertion_order() {
    let log = MessageLog::new();
    log.append("HeroService: fetched heroes");
    log.append("HeroService: fetched hero id=12");
    log.append("HeroService: fetched heroes");

    assert_eq!(
        log.entries(),
        vec![
            "HeroService: fetched heroes",
            "HeroService: fetched hero id=12",
            "HeroService: fetched heroes",
        ]
    );
    assert_eq!(log.len(), 3);
}

#[test]
fn clear_is_idempotent() {
    let log = MessageLog::new();
    log.append("HeroService: added hero w/ id=42");

    log.clear();
    assert!(log.entries().is_empty());
    log.clear();
    assert!(log.entries().is_empty());
    assert!(log.is_empty());
}

#[test]
fn clones_share_one_list() {
    let log = MessageLog::new();
    let view_handle = log.clone();

    log.append("HeroService: deleted hero id=7");
    assert_eq!(view_handle.entries(), vec!["HeroService: deleted hero id=7"]);

    view_handle.clear();
    assert!(log.is_empty());
}

#[test]
fn snapshot_is_detached_from_later_appends() {
    let log = MessageLog::new();
    log.append("first");
    let snapshot = log.entries();
    log.append("second");

    assert_eq!(snapshot, vec!["first"]);
    assert_eq!(log.len(), 2);
}
