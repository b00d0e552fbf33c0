use dtomap::{row, Entity, Value};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, PartialEq, Entity)]
struct SomeSimpleType {
    #[key]
    id: Option<i64>,

    field1: String,
}

#[derive(Debug, Default, Clone, PartialEq, Entity)]
struct TypeWithOutId {
    field1: String,
}

const COUNT: &str = "SELECT COUNT(*) FROM `some_simple_type` WHERE `id` = ?";

#[test]
fn existing_row_is_updated() {
    let (db, client) = tests::mock();
    client.with_rows(COUNT, vec![row! { "COUNT(*)" => 1_i64 }]);

    let mut rec = SomeSimpleType {
        id: Some(5),
        field1: "a".into(),
    };
    db.persist(&mut rec).unwrap();

    let mut log = client.log();

    let count = log.pop_execution();
    assert_eq!(count.sql, COUNT);
    assert_eq!(count.params, [Value::I64(5)]);

    let update = log.pop_execution();
    assert_eq!(
        update.sql,
        "UPDATE `some_simple_type` SET `field1` = ? WHERE `id` = ?"
    );
    assert_eq!(update.params, [Value::from("a"), Value::I64(5)]);
    assert!(log.is_empty());
}

#[test]
fn missing_row_is_inserted_with_its_key() {
    let (db, client) = tests::mock();
    client.with_rows(COUNT, vec![row! { "COUNT(*)" => 0_i64 }]);

    let mut rec = SomeSimpleType {
        id: Some(5),
        field1: "a".into(),
    };
    db.persist(&mut rec).unwrap();

    let mut log = client.log();
    assert_eq!(log.pop_execution().sql, COUNT);

    let insert = log.pop_execution();
    assert_eq!(
        insert.sql,
        "INSERT INTO `some_simple_type` (`id`, `field1`) VALUES (?, ?)"
    );
    assert_eq!(insert.params, [Value::I64(5), Value::from("a")]);
    assert_eq!(rec.id, Some(5));
}

#[test]
fn unset_identity_inserts_without_counting() {
    let (db, client) = tests::mock();
    client.set_last_insert_id("666");

    let mut rec = SomeSimpleType {
        id: None,
        field1: "a".into(),
    };
    db.persist(&mut rec).unwrap();

    assert_eq!(rec.id, Some(666));

    let log = client.log();
    assert_eq!(log.len(), 1);
    assert_eq!(log.count(|e| e.sql == COUNT), 0);
}

#[test]
fn persist_requires_identity_field() {
    let (db, client) = tests::mock();

    let err = db.persist(&mut TypeWithOutId::default()).unwrap_err();
    assert!(err.is_missing_identity());
    assert!(client.log().is_empty());
}
