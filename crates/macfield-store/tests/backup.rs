use macfield_store::error::StoreError;
use macfield_store::repo::OrderNew;
use macfield_store::Store;
use tempfile::TempDir;

#[test]
fn backup_creates_readable_snapshot() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");
    let backup_path = temp.path().join("backup.sqlite3");

    let store = Store::open(&db_path).expect("open store");
    store.migrate().expect("migrate");
    store
        .orders()
        .create(
            1_700_000_000,
            OrderNew {
                billing_name: "Ada Lovelace".to_string(),
                billing_email: None,
                meta: Vec::new(),
            },
        )
        .expect("create order");

    store.backup_to(&backup_path).expect("backup");
    assert!(backup_path.exists());

    let snapshot = Store::open(&backup_path).expect("open backup");
    let orders = snapshot.orders().list_all().expect("list orders");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].billing_name, "Ada Lovelace");
}

#[test]
fn backup_rejects_database_path() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");
    let store = Store::open(&db_path).expect("open store");
    store.migrate().expect("migrate");

    let err = store.backup_to(&db_path).expect_err("backup should fail");
    assert!(matches!(err, StoreError::InvalidBackupPath(_)));
}

#[test]
fn backup_rejects_sidecar_paths() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("macfield.sqlite3");
    let store = Store::open(&db_path).expect("open store");
    store.migrate().expect("migrate");

    let wal_path = temp.path().join("macfield.sqlite3-wal");
    let err = store.backup_to(&wal_path).expect_err("backup should fail");
    assert!(matches!(err, StoreError::InvalidBackupPath(_)));
}

#[test]
fn migrations_are_idempotent() {
    let store = Store::open_in_memory().expect("open store");
    store.migrate().expect("first run");
    store.migrate().expect("second run");
    assert_eq!(store.schema_version().expect("version"), 1);
}
