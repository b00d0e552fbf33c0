use dtomap::{row, Entity, Mapping, Primitive, Value};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Clone, PartialEq, Entity)]
struct Account {
    #[key]
    id: Option<i64>,

    name: String,
}

#[test]
fn statements_are_reused_per_sql_and_type() {
    let (db, client) = tests::mock();
    let sql = "SELECT * FROM `account` WHERE `name` = ?";

    db.prepare::<Account>(sql).unwrap();
    db.prepare::<Account>(sql).unwrap();
    assert_eq!(client.log().prepared().len(), 1);

    // same text, different result type
    db.prepare::<i64>(sql).unwrap();
    assert_eq!(client.log().prepared().len(), 2);
    assert_eq!(db.statement_cache().len(), 2);
}

#[test]
fn metadata_is_built_once() {
    let (db, _client) = tests::mock();

    let first = db.metadata::<Account>().unwrap();
    let second = db.metadata::<Account>().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}

#[test]
fn fetch_loads_entities() {
    let (db, client) = tests::mock();
    let sql = "SELECT * FROM `account` WHERE `name` LIKE ?";
    client.with_rows(
        sql,
        vec![
            row! { "id" => 1_i64, "name" => "ann" },
            row! { "id" => 2_i64, "name" => "andy" },
        ],
    );

    let stmt = db.prepare::<Account>(sql).unwrap();
    assert!(matches!(stmt.mapping(), Mapping::Entity(_)));

    stmt.execute(&[Value::from("an%")]).unwrap();
    assert_eq!(stmt.fetch().unwrap().unwrap().name, "ann");
    assert_eq!(
        stmt.fetch_all().unwrap(),
        [Account {
            id: Some(2),
            name: "andy".into()
        }]
    );
    assert_eq!(stmt.fetch().unwrap(), None);
}

#[test]
fn execute_record_binds_stored_values() {
    let (db, client) = tests::mock();
    let sql = "INSERT INTO `account` (`id`, `name`) VALUES (?, ?)";

    let stmt = db.prepare::<Account>(sql).unwrap();
    stmt.execute_record(&Account {
        id: Some(3),
        name: "cy".into(),
    })
    .unwrap();

    let mut log = client.log();
    assert_eq!(
        log.pop_execution().params,
        [Value::I64(3), Value::from("cy")]
    );
}

#[test]
fn query_casts_primitives() {
    let (db, client) = tests::mock();

    client.with_rows("SELECT COUNT(*) FROM `account`", vec![row! { "n" => "12abc" }]);
    assert_eq!(
        db.query::<i64>("SELECT COUNT(*) FROM `account`", &[]).unwrap(),
        [12]
    );

    client.with_rows("SELECT `ratio`", vec![row! { "ratio" => "2.5xyz" }]);
    assert_eq!(db.query::<f64>("SELECT `ratio`", &[]).unwrap(), [2.5]);

    client.with_rows(
        "SELECT `flag`",
        vec![
            row! { "flag" => "0" },
            row! { "flag" => "" },
            row! { "flag" => Value::Null },
            row! { "flag" => 7_i64 },
        ],
    );
    assert_eq!(
        db.query::<bool>("SELECT `flag`", &[]).unwrap(),
        [false, false, false, true]
    );

    client.with_rows("SELECT `name`", vec![row! { "name" => 5_i64 }]);
    assert_eq!(db.query::<String>("SELECT `name`", &[]).unwrap(), ["5"]);

    let stmt = db.prepare::<String>("SELECT `name`").unwrap();
    assert_eq!(stmt.mapping(), &Mapping::Primitive(Primitive::String));
}
