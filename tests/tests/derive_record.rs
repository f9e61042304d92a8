use pretty_assertions::assert_eq;
use rowmap::{Field, Primitive, Record, Value};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct User {
    #[key]
    #[auto]
    #[column]
    id: u64,

    #[column("user_name")]
    name: String,

    #[readonly]
    #[column]
    created_at: Option<String>,

    // Not mapped
    session: Option<String>,
}

#[test]
fn descriptor_table_follows_attributes() {
    assert_eq!(User::NAME, "User");
    assert_eq!(
        User::fields(),
        [
            Field::new("id", "id")
                .with_primary_key()
                .with_auto_increment(),
            Field::new("name", "user_name"),
            Field::new("created_at", "created_at").with_read_only(),
        ]
    );
}

#[test]
fn unmapped_fields_are_absent() {
    assert!(User::fields().iter().all(|field| field.name != "session"));
    assert_eq!(User::field_indices("session").count(), 0);
}

#[test]
fn primary_key_lookup() {
    let (index, field) = User::primary_key().unwrap();
    assert_eq!(index, 0);
    assert_eq!(field.column, "id");
}

#[test]
fn get_and_set_by_index() {
    let mut user = User::default();

    user.set(0, Value::I64(7)).unwrap();
    user.set(1, Value::from("Jane")).unwrap();
    user.set(2, Value::Null).unwrap();

    assert_eq!(
        user,
        User {
            id: 7,
            name: "Jane".into(),
            created_at: None,
            session: None,
        }
    );

    assert_eq!(user.get(0).unwrap(), Value::U64(7));
    assert_eq!(user.get(1).unwrap(), Value::from("Jane"));
    assert_eq!(user.get(2).unwrap(), Value::Null);
}

#[test]
fn out_of_range_index() {
    let mut user = User::default();

    let err = user.get(3).unwrap_err();
    assert!(err.is_metadata());
    assert_eq!(
        err.to_string(),
        "invalid record metadata for `User`: no field at index 3"
    );

    assert!(user.set(3, Value::Null).unwrap_err().is_metadata());
}

#[test]
fn set_with_wrong_type() {
    let mut user = User::default();

    let err = user.set(1, Value::I64(1)).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to String");
}

#[derive(Debug, Default, Record)]
struct Token {
    #[key]
    #[column]
    id: Uuid,

    #[auto(increment)]
    #[column]
    serial: i64,

    #[column]
    r#type: String,

    #[column]
    payload: Vec<u8>,

    #[column]
    active: bool,

    #[column]
    score: f64,
}

#[test]
fn raw_identifiers_and_auto_strategy() {
    assert_eq!(
        Token::fields(),
        [
            Field::new("id", "id").with_primary_key(),
            Field::new("serial", "serial").with_auto_increment(),
            Field::new("type", "type"),
            Field::new("payload", "payload"),
            Field::new("active", "active"),
            Field::new("score", "score"),
        ]
    );
}

#[test]
fn uuid_key_loads_from_text() {
    let id = Uuid::new_v4();
    let mut token = Token::default();

    token.set(0, Value::String(id.to_string())).unwrap();
    token.set(4, Value::I64(1)).unwrap();

    assert_eq!(token.id, id);
    assert!(token.active);
    assert_eq!(token.get(0).unwrap(), id.to_value());
}

#[derive(Debug, Default, Record)]
struct Empty {
    scratch: String,
}

#[test]
fn record_without_mapped_fields() {
    assert!(Empty::fields().is_empty());
    assert!(Empty::primary_key().is_none());
    assert_eq!(Empty::default().scratch, "");
}
