//! Integration tests for the SQLite storage layer.

mod common;

use common::{date, reservation, TestDb};
use spotbook::database::{get_schema_version, Database, DatabaseConfig};
use spotbook::{Error, ReservationStore, SpotId, UserId};

#[test]
fn test_fresh_database_is_initialized() {
    let env = TestDb::new();
    let version = get_schema_version(env.db.connection()).unwrap();
    assert_eq!(version, 1);
    assert!(env.db.list_all_reservations().unwrap().is_empty());
}

#[test]
fn test_reservations_survive_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("spotbook.db");

    {
        let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
        db.create_reservation(&reservation(date(2026, 8, 10), 12, "alice"))
            .unwrap();
    }

    let db = Database::open(DatabaseConfig::new(&path)).unwrap();
    let all = db.list_all_reservations().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].booked_at(), date(2026, 8, 10));
    assert_eq!(all[0].spot(), SpotId::try_from(12).unwrap());
    assert_eq!(all[0].user(), &UserId::new("alice").unwrap());
}

#[test]
fn test_unsupported_schema_version_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("spotbook.db");

    {
        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        db.connection()
            .execute(
                "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
                [],
            )
            .unwrap();
    }

    let err = Database::open(DatabaseConfig::new(&path)).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 999
        }
    ));
}

#[test]
fn test_primary_key_enforces_spot_uniqueness() {
    let mut env = TestDb::new();
    env.seed(date(2026, 8, 10), 12, "alice");

    // The storage layer rejects a competing write even without validation
    let err = env
        .db
        .create_reservation(&reservation(date(2026, 8, 10), 12, "bob"))
        .unwrap_err();
    assert!(matches!(err, Error::SpotAlreadyBooked { .. }));
}

#[test]
fn test_queries_are_keyed_correctly() {
    let mut env = TestDb::new();
    env.seed(date(2026, 8, 10), 12, "alice");
    env.seed(date(2026, 8, 10), 13, "bob");
    env.seed(date(2026, 8, 11), 12, "carol");
    env.seed(date(2026, 8, 20), 5, "alice");

    let by_pair = env
        .db
        .find_by_date_and_spot(date(2026, 8, 10), SpotId::try_from(12).unwrap())
        .unwrap();
    assert_eq!(by_pair.len(), 1);
    assert_eq!(by_pair[0].user(), &UserId::new("alice").unwrap());

    let by_date = env.db.find_by_date(date(2026, 8, 10)).unwrap();
    assert_eq!(by_date.len(), 2);

    let by_user = env.db.find_by_user(&UserId::new("alice").unwrap()).unwrap();
    assert_eq!(by_user.len(), 2);
    assert!(by_user.iter().all(|r| r.user().as_str() == "alice"));

    let empty = env.db.find_by_date(date(2026, 9, 1)).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_list_is_ordered_by_date_then_spot() {
    let mut env = TestDb::new();
    env.seed(date(2026, 8, 11), 2, "carol");
    env.seed(date(2026, 8, 10), 13, "bob");
    env.seed(date(2026, 8, 10), 12, "alice");

    let all = env.db.list_all_reservations().unwrap();
    let keys: Vec<_> = all
        .iter()
        .map(|r| (r.booked_at(), r.spot().value()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (date(2026, 8, 10), 12),
            (date(2026, 8, 10), 13),
            (date(2026, 8, 11), 2),
        ]
    );
}

#[test]
fn test_delete_then_requery() {
    let mut env = TestDb::new();
    env.seed(date(2026, 8, 10), 12, "alice");

    env.db
        .delete_reservation(date(2026, 8, 10), SpotId::try_from(12).unwrap())
        .unwrap();

    let by_pair = env
        .db
        .find_by_date_and_spot(date(2026, 8, 10), SpotId::try_from(12).unwrap())
        .unwrap();
    assert!(by_pair.is_empty());

    // Deleting again reports the absence
    let err = env
        .db
        .delete_reservation(date(2026, 8, 10), SpotId::try_from(12).unwrap())
        .unwrap_err();
    assert!(err.is_not_found());
}
