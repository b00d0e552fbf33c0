use chrono::{NaiveDate, NaiveDateTime};
use dtomap::{mapper, row, Entity, EntityMetadata, ToValue, Value};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Settings {
    verbose: bool,
}

/// Written through `stringify`, read back through its constructor.
#[derive(Debug, Clone, PartialEq)]
struct Owner(String);

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Owner {
    fn from(src: String) -> Owner {
        Owner(src)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Port(u16);

impl From<i64> for Port {
    fn from(src: i64) -> Port {
        Port(src as u16)
    }
}

impl ToValue for Port {
    fn to_value(&self) -> Value {
        Value::I64(i64::from(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Entity)]
struct Server {
    #[key]
    id: i64,

    #[codec(ipv4)]
    ip_address: String,

    #[codec(timestamp)]
    last_seen: NaiveDateTime,

    #[codec(json)]
    tags: Vec<String>,

    #[codec(json)]
    settings: Option<Settings>,

    #[codec(stringify, construct(String))]
    owner: Owner,

    #[codec(stringify)]
    ratio: f64,

    #[codec(construct(i64))]
    port: Port,

    #[codec(construct(i64))]
    backup_port: Option<Port>,
}

fn server() -> Server {
    Server {
        id: 1,
        ip_address: "221.32.3.143".into(),
        last_seen: NaiveDate::from_ymd_opt(2024, 5, 3)
            .unwrap()
            .and_hms_opt(13, 37, 0)
            .unwrap(),
        tags: vec!["a".into(), "b".into()],
        settings: Some(Settings { verbose: true }),
        owner: Owner("alice".into()),
        ratio: 0.5,
        port: Port(5432),
        backup_port: None,
    }
}

#[test]
fn dehydrate_stores_encoded_values() {
    let meta = EntityMetadata::of::<Server>().unwrap();
    let row = mapper::dehydrate(&server(), &meta).unwrap();

    assert_eq!(
        row,
        row! {
            "id" => 1_i64,
            "ip_address" => 3709862799_i64,
            "last_seen" => "2024-05-03 13:37:00",
            "tags" => r#"["a","b"]"#,
            "settings" => r#"{"verbose":true}"#,
            "owner" => "alice",
            "ratio" => "0.5",
            "port" => 5432_i64,
            "backup_port" => Value::Null,
        }
    );
}

#[test]
fn hydrate_inverts_dehydrate() {
    let meta = EntityMetadata::of::<Server>().unwrap();

    let mut record = server();
    let row = mapper::dehydrate(&record, &meta).unwrap();
    assert_eq!(mapper::hydrate::<Server>(row, &meta).unwrap(), record);

    record.settings = None;
    record.backup_port = Some(Port(5433));
    let row = mapper::dehydrate(&record, &meta).unwrap();
    assert_eq!(mapper::hydrate::<Server>(row, &meta).unwrap(), record);
}

#[test]
fn ipv4_reads_from_integer() {
    let meta = EntityMetadata::of::<Server>().unwrap();

    let mut row = mapper::dehydrate(&server(), &meta).unwrap();
    row.insert("ip_address", 167772161_i64);

    let loaded: Server = mapper::hydrate(row, &meta).unwrap();
    assert_eq!(loaded.ip_address, "10.0.0.1");
}

#[test]
fn conversion_failures_are_reported() {
    let meta = EntityMetadata::of::<Server>().unwrap();

    let mut record = server();
    record.ip_address = "not an address".into();

    let err = mapper::dehydrate(&record, &meta).unwrap_err();
    assert!(err.is_type_conversion());

    let mut row = mapper::dehydrate(&server(), &meta).unwrap();
    row.insert("last_seen", "yesterday");

    let err = mapper::hydrate::<Server>(row, &meta).unwrap_err();
    assert!(err.is_type_conversion());
}
