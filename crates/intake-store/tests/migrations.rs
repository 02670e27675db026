use intake_store::migrate::latest_version;
use intake_store::Store;

#[test]
fn migrate_is_idempotent() {
    let store = Store::open_in_memory().expect("open in memory");
    assert_eq!(store.schema_version().expect("version"), 0);
    store.migrate().expect("migrate");
    store.migrate().expect("migrate again");
    assert_eq!(store.schema_version().expect("version"), latest_version());
}

#[test]
fn migrate_rejects_newer_database() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    store
        .connection()
        .execute(
            "UPDATE intake_schema SET version = ?1;",
            [latest_version() + 1],
        )
        .expect("bump version");
    let err = store.migrate().unwrap_err();
    assert!(err.to_string().contains("newer than available migrations"));
}
