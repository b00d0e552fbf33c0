use dtomap::{row, Entity, Value};
use pretty_assertions::assert_eq;
use tests::Execution;

#[derive(Debug, Default, Clone, PartialEq, Entity)]
struct SomeSimpleType {
    #[key]
    id: Option<i64>,

    field1: String,

    another_field: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Entity)]
struct TypeWithOutId {
    field1: String,
    field2: String,
}

const SELECT: &str = "SELECT * FROM `some_simple_type` WHERE `id` = ?";
const INSERT_WITH_ID: &str =
    "INSERT INTO `some_simple_type` (`id`, `field1`, `another_field`) VALUES (?, ?, ?)";
const INSERT_WITHOUT_ID: &str =
    "INSERT INTO `some_simple_type` (`field1`, `another_field`) VALUES (?, ?)";
const UPDATE: &str =
    "UPDATE `some_simple_type` SET `field1` = ?, `another_field` = ? WHERE `id` = ?";
const DELETE: &str = "DELETE FROM `some_simple_type` WHERE `id` = ?";

fn record(id: Option<i64>) -> SomeSimpleType {
    SomeSimpleType {
        id,
        field1: "a".into(),
        another_field: 2,
    }
}

fn exec(sql: &str, params: Vec<Value>) -> Execution {
    Execution {
        sql: sql.to_string(),
        params,
    }
}

#[test]
fn get_loads_first_row() {
    let (db, client) = tests::mock();
    client.with_rows(
        SELECT,
        vec![row! { "id" => 5_i64, "field1" => "a", "another_field" => 2_i64 }],
    );

    let found: Option<SomeSimpleType> = db.get(5_i64).unwrap();
    assert_eq!(found, Some(record(Some(5))));

    let mut log = client.log();
    assert_eq!(log.pop_execution(), exec(SELECT, vec![Value::I64(5)]));
}

#[test]
fn get_without_row_is_none() {
    let (db, _client) = tests::mock();
    assert_eq!(db.get::<SomeSimpleType>(9_i64).unwrap(), None);
}

#[test]
fn get_all_loads_every_row() {
    let (db, client) = tests::mock();
    client.with_rows(
        "SELECT * FROM `type_with_out_id`",
        vec![
            row! { "field1" => "a", "field2" => "b" },
            row! { "field1" => "c", "field2" => "d" },
        ],
    );

    let all: Vec<TypeWithOutId> = db.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].field1, "c");
}

#[test]
fn insert_with_key() {
    let (db, client) = tests::mock();

    let mut rec = record(Some(5));
    assert!(db.insert(&mut rec).unwrap());

    let mut log = client.log();
    assert_eq!(
        log.pop_execution(),
        exec(
            INSERT_WITH_ID,
            vec![Value::I64(5), Value::from("a"), Value::I64(2)]
        )
    );
    assert!(log.is_empty());
}

#[test]
fn insert_assigns_generated_identity() {
    let (db, client) = tests::mock();
    client.set_last_insert_id("666");

    let mut rec = record(None);
    db.insert(&mut rec).unwrap();
    assert_eq!(rec.id, Some(666));

    let mut log = client.log();
    assert_eq!(
        log.pop_execution(),
        exec(INSERT_WITHOUT_ID, vec![Value::from("a"), Value::I64(2)])
    );
}

#[test]
fn zero_identity_counts_as_unset() {
    let (db, client) = tests::mock();
    client.set_last_insert_id("12");

    let mut rec = record(Some(0));
    db.insert(&mut rec).unwrap();

    assert_eq!(rec.id, Some(12));
    assert!(client.log().any(|e| e.sql == INSERT_WITHOUT_ID));
}

#[test]
fn insert_without_identity_field_inserts_all_columns() {
    let (db, client) = tests::mock();

    let mut rec = TypeWithOutId {
        field1: "x".into(),
        field2: "y".into(),
    };
    db.insert(&mut rec).unwrap();

    let mut log = client.log();
    assert_eq!(
        log.pop_execution(),
        exec(
            "INSERT INTO `type_with_out_id` (`field1`, `field2`) VALUES (?, ?)",
            vec![Value::from("x"), Value::from("y")]
        )
    );
}

#[test]
fn update_puts_identity_last() {
    let (db, client) = tests::mock();

    db.update(&record(Some(5))).unwrap();

    let mut log = client.log();
    assert_eq!(
        log.pop_execution(),
        exec(
            UPDATE,
            vec![Value::from("a"), Value::I64(2), Value::I64(5)]
        )
    );
}

#[test]
fn update_errors_are_distinct() {
    let (db, client) = tests::mock();

    let err = db.update(&TypeWithOutId::default()).unwrap_err();
    assert!(err.is_mapping());
    assert!(err.is_missing_identity());
    assert!(!err.is_null_identity());

    let err = db.update(&record(None)).unwrap_err();
    assert!(err.is_mapping());
    assert!(err.is_null_identity());
    assert!(!err.is_missing_identity());

    assert!(client.log().is_empty());
}

#[test]
fn delete_by_record_and_by_id() {
    let (db, client) = tests::mock();

    db.delete(&record(Some(5))).unwrap();
    db.delete_by_id::<SomeSimpleType>(7_i64).unwrap();

    let mut log = client.log();
    assert_eq!(log.pop_execution(), exec(DELETE, vec![Value::I64(5)]));
    assert_eq!(log.pop_execution(), exec(DELETE, vec![Value::I64(7)]));

    // one prepared statement serves both deletes
    assert_eq!(log.prepared(), [DELETE]);
}

#[test]
fn explicit_zero_id_is_a_real_key() {
    let (db, client) = tests::mock();
    client.with_rows(
        SELECT,
        vec![row! { "id" => 0_i64, "field1" => "a", "another_field" => 2_i64 }],
    );

    let found = db.get::<SomeSimpleType>(0_i64).unwrap();
    assert_eq!(found, Some(record(Some(0))));
    assert!(db.delete_by_id::<SomeSimpleType>(0_i64).unwrap());

    let mut log = client.log();
    assert_eq!(log.pop_execution(), exec(SELECT, vec![Value::I64(0)]));
    assert_eq!(log.pop_execution(), exec(DELETE, vec![Value::I64(0)]));
}

#[test]
fn delete_requires_identity() {
    let (db, client) = tests::mock();

    assert!(db.delete(&record(None)).unwrap_err().is_null_identity());
    assert!(db
        .delete(&TypeWithOutId::default())
        .unwrap_err()
        .is_missing_identity());
    assert!(db
        .delete_by_id::<SomeSimpleType>(None::<i64>)
        .unwrap_err()
        .is_null_identity());
    assert!(db
        .get::<SomeSimpleType>(None::<i64>)
        .unwrap_err()
        .is_null_identity());
    assert!(db
        .get::<TypeWithOutId>(1_i64)
        .unwrap_err()
        .is_missing_identity());

    assert!(client.log().is_empty());
}

#[test]
fn client_passthrough() {
    let (db, client) = tests::mock();

    assert!(db.begin_transaction().unwrap());
    assert!(db.commit().unwrap());
    assert!(db.rollback().unwrap());
    assert_eq!(client.transactions(), ["begin", "commit", "rollback"]);

    client.set_last_insert_id("42");
    assert_eq!(db.last_insert_id().unwrap(), "42");
}

#[test]
fn driver_errors_surface_unchanged() {
    let (db, client) = tests::mock();
    client.fail_on(UPDATE);

    assert_eq!(db.error_code(), None);

    let err = db.update(&record(Some(5))).unwrap_err();
    assert!(err.is_driver());
    assert_eq!(err.failed_sql(), Some(UPDATE));

    let source = std::error::Error::source(&err).unwrap();
    assert!(source.downcast_ref::<std::io::Error>().is_some());

    assert_eq!(db.error_code().as_deref(), Some("42000"));
    assert_eq!(db.error_info().len(), 2);
}
