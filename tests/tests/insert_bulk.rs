use dtomap::{Entity, Value};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, PartialEq, Entity)]
struct ToBeBulkInserted {
    #[key]
    id: Option<i64>,

    field1: String,

    field2: String,
}

#[derive(Debug, Default, Clone, PartialEq, Entity)]
struct TypeWithOutId {
    field1: String,
}

fn records(n: usize) -> Vec<ToBeBulkInserted> {
    (0..n)
        .map(|i| ToBeBulkInserted {
            id: None,
            field1: format!("a{i}"),
            field2: format!("b{i}"),
        })
        .collect()
}

const TWO: &str =
    "INSERT INTO `to_be_bulk_inserted` (`field1`, `field2`) VALUES (?, ?), (?, ?)";
const ONE: &str = "INSERT INTO `to_be_bulk_inserted` (`field1`, `field2`) VALUES (?, ?)";

#[test]
fn chunks_into_multi_row_statements() {
    let (db, client) = tests::mock();

    assert!(db.insert_bulk(&records(5), 2).unwrap());

    let mut log = client.log();
    assert_eq!(log.len(), 3);

    let first = log.pop_execution();
    assert_eq!(first.sql, TWO);
    assert_eq!(
        first.params,
        [
            Value::from("a0"),
            Value::from("b0"),
            Value::from("a1"),
            Value::from("b1"),
        ]
    );

    let second = log.pop_execution();
    assert_eq!(second.sql, TWO);
    assert_eq!(second.params.len(), 4);

    let last = log.pop_execution();
    assert_eq!(last.sql, ONE);
    assert_eq!(last.params, [Value::from("a4"), Value::from("b4")]);

    // the two-tuple statement is prepared once
    assert_eq!(log.prepared(), [TWO, ONE]);
}

#[test]
fn identities_are_not_assigned_back() {
    let (db, client) = tests::mock();
    client.set_last_insert_id("9");

    let batch = records(2);
    db.insert_bulk(&batch, 10).unwrap();

    assert!(batch.iter().all(|rec| rec.id.is_none()));
}

#[test]
fn zero_chunk_size_is_rejected() {
    let (db, client) = tests::mock();

    let err = db.insert_bulk(&records(3), 0).unwrap_err();
    assert!(err.is_validation());
    assert!(client.log().is_empty());
}

#[test]
fn empty_input_executes_nothing() {
    let (db, client) = tests::mock();

    assert!(db.insert_bulk::<ToBeBulkInserted>(&[], 2).unwrap());
    assert!(client.log().is_empty());
}

#[test]
fn type_without_identity_inserts_every_column() {
    let (db, client) = tests::mock();

    let batch = vec![
        TypeWithOutId { field1: "x".into() },
        TypeWithOutId { field1: "y".into() },
    ];
    db.insert_bulk(&batch, 2).unwrap();

    let mut log = client.log();
    let exec = log.pop_execution();
    assert_eq!(
        exec.sql,
        "INSERT INTO `type_with_out_id` (`field1`) VALUES (?), (?)"
    );
    assert_eq!(exec.params, [Value::from("x"), Value::from("y")]);
}
