use dtomap::{schema::IdentityType, Entity, EntityMetadata, Value};
use pretty_assertions::assert_eq;

#[allow(non_snake_case)]
#[derive(Debug, Default, Entity)]
struct SomeSimpleType {
    #[key]
    id: Option<i64>,

    field1: String,

    thisIsASimpleField: i32,
}

#[derive(Debug, Default, Entity)]
#[table = "dto_table"]
struct ForcedTable {
    #[key]
    id: i64,
}

#[allow(non_snake_case)]
#[derive(Debug, Default, Entity)]
#[naming(lower_case)]
struct ToBeBulkInserted {
    fieldOne: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Default, Entity)]
#[naming(verbatim)]
struct MixedNaming {
    #[column("explicit")]
    renamed: String,

    #[naming(snake_case)]
    someField: String,

    otherField: String,
}

#[derive(Debug, Default, PartialEq, Entity)]
struct WithSkipped {
    #[key]
    id: i64,

    name: String,

    #[skip]
    scratch: Vec<String>,
}

#[derive(Debug, Default, Entity)]
struct Session {
    #[key]
    token: String,

    label: Option<String>,
}

#[derive(Debug, Default, Entity)]
struct TypeWithOutId {
    field1: String,
    field2: String,
}

#[derive(Debug, Default, Entity)]
struct Person {
    #[key]
    id: i64,

    name: String,

    #[column("name")]
    alias: String,
}

fn columns(meta: &EntityMetadata) -> Vec<&str> {
    meta.fields.iter().map(|f| f.schema_name.as_str()).collect()
}

#[test]
fn snake_case_by_default() {
    let meta = EntityMetadata::of::<SomeSimpleType>().unwrap();

    assert_eq!(meta.table_name, "some_simple_type");
    assert_eq!(columns(&meta), ["id", "field1", "this_is_a_simple_field"]);
    assert_eq!(meta.entity_name(), "SomeSimpleType");

    let identity = meta.identity.unwrap();
    assert_eq!(identity.index, 0);
    assert_eq!(identity.ty, IdentityType::Integer);
    assert!(meta.fields[0].nullable);
    assert!(!meta.fields[1].nullable);
}

#[test]
fn forced_table_name() {
    let meta = EntityMetadata::of::<ForcedTable>().unwrap();
    assert_eq!(meta.table_name, "dto_table");
}

#[test]
fn type_naming_covers_table_and_fields() {
    let meta = EntityMetadata::of::<ToBeBulkInserted>().unwrap();

    assert_eq!(meta.table_name, "tobebulkinserted");
    assert_eq!(columns(&meta), ["fieldone"]);
    assert_eq!(meta.identity, None);
}

#[test]
fn field_overrides_win_over_type_naming() {
    let meta = EntityMetadata::of::<MixedNaming>().unwrap();

    assert_eq!(meta.table_name, "MixedNaming");
    assert_eq!(columns(&meta), ["explicit", "some_field", "otherField"]);
    assert_eq!(meta.fields[0].native_name, "renamed");
}

#[test]
fn skipped_fields_are_not_mapped() {
    let meta = EntityMetadata::of::<WithSkipped>().unwrap();
    assert_eq!(columns(&meta), ["id", "name"]);

    let record = WithSkipped {
        id: 4,
        name: "four".into(),
        scratch: vec!["lost".into()],
    };
    assert_eq!(
        record.to_values().unwrap(),
        [Value::I64(4), Value::from("four")]
    );
}

#[test]
fn string_identity() {
    let meta = EntityMetadata::of::<Session>().unwrap();
    assert_eq!(meta.identity_type(), Some(IdentityType::String));
    assert_eq!(meta.identity_field().unwrap().schema_name, "token");
}

#[test]
fn set_identity_assigns_the_key_field() {
    let mut record = SomeSimpleType::default();
    record.set_identity(Value::I64(666)).unwrap();
    assert_eq!(record.id, Some(666));

    let mut session = Session::default();
    session.set_identity(Value::from("abc")).unwrap();
    assert_eq!(session.token, "abc");
}

#[test]
fn set_identity_without_key_fails() {
    let mut record = TypeWithOutId::default();
    let err = record.set_identity(Value::I64(1)).unwrap_err();

    assert!(err.is_mapping());
    assert!(err.is_missing_identity());
}

#[test]
fn shared_column_is_rejected() {
    let err = EntityMetadata::of::<Person>().unwrap_err();
    assert!(err.is_duplicate_column());

    let (db, client) = tests::mock();
    let mut person = Person {
        id: 1,
        name: "a".into(),
        alias: "b".into(),
    };

    assert!(db.insert(&mut person).unwrap_err().is_duplicate_column());
    assert!(client.log().is_empty());
}
