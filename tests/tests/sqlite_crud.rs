use pretty_assertions::assert_eq;
use rowmap::{Db, Record, Value};
use tests::setup_db;

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct User {
    #[key]
    #[auto]
    #[column]
    id: u64,

    #[column]
    name: String,

    #[column]
    age: u8,

    #[readonly]
    #[column]
    created_at: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct AuditEntry {
    #[column]
    action: String,

    #[column("actor_name")]
    actor: String,
}

async fn create_tables(db: &Db) {
    db.execute(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .await
    .unwrap();

    db.execute("CREATE TABLE audit_log (action TEXT NOT NULL, actor_name TEXT NOT NULL)")
        .await
        .unwrap();
}

#[tokio::test]
async fn crud_round_trip() {
    let db = setup_db().await;
    create_tables(&db).await;

    let users: Vec<User> = db
        .select("SELECT id, name, age, created_at FROM users", &[])
        .await
        .unwrap();
    assert!(users.is_empty());

    for i in 0..10u8 {
        let user = User {
            name: format!("user-{i}"),
            age: 20 + i,
            ..User::default()
        };
        let id = db.insert("users", &user).await.unwrap();
        assert_eq!(id, i64::from(i) + 1);
    }

    let count = db
        .count("SELECT COUNT(*) AS result FROM users", &[])
        .await
        .unwrap();
    assert_eq!(count, 10);

    let mut users: Vec<User> = db
        .select(
            "SELECT id, name, age, created_at FROM users ORDER BY id",
            &[],
        )
        .await
        .unwrap();
    assert_eq!(users.len(), 10);

    for (i, user) in users.iter().enumerate() {
        assert_eq!(user.id, i as u64 + 1);
        assert_eq!(user.name, format!("user-{i}"));
        assert_eq!(user.age, 20 + i as u8);
        assert!(user.created_at.is_some());
    }

    for user in &mut users {
        user.name = format!("{}-renamed", user.name);
        // Read-only: never written back.
        user.created_at = Some("1970-01-01".into());
        let affected = db.update("users", &*user, None).await.unwrap();
        assert_eq!(affected, 1);
    }

    let reloaded: Vec<User> = db
        .select(
            "SELECT id, name, age, created_at FROM users ORDER BY id",
            &[],
        )
        .await
        .unwrap();

    for (i, user) in reloaded.iter().enumerate() {
        assert_eq!(user.name, format!("user-{i}-renamed"));
        assert_ne!(user.created_at.as_deref(), Some("1970-01-01"));
    }

    db.close().await;
}

#[tokio::test]
async fn select_with_params_and_column_subset() {
    let db = setup_db().await;
    create_tables(&db).await;

    for name in ["ann", "bob", "cy"] {
        let user = User {
            name: name.into(),
            age: 30,
            ..User::default()
        };
        db.insert("users", &user).await.unwrap();
    }

    let users: Vec<User> = db
        .select(
            "SELECT name, id FROM users WHERE name <> ? ORDER BY id",
            &[Value::from("bob")],
        )
        .await
        .unwrap();

    assert_eq!(
        users,
        [
            User {
                id: 1,
                name: "ann".into(),
                ..User::default()
            },
            User {
                id: 3,
                name: "cy".into(),
                ..User::default()
            },
        ]
    );
}

#[tokio::test]
async fn select_into_appends() {
    let db = setup_db().await;
    create_tables(&db).await;

    let entry = AuditEntry {
        action: "login".into(),
        actor: "jane".into(),
    };
    db.insert("audit_log", &entry).await.unwrap();

    let mut entries = vec![AuditEntry::default()];
    db.select_into(&mut entries, "SELECT action, actor_name FROM audit_log", &[])
        .await
        .unwrap();

    assert_eq!(entries, [AuditEntry::default(), entry]);
}

#[tokio::test]
async fn update_with_custom_where() {
    let db = setup_db().await;
    create_tables(&db).await;

    let entry = AuditEntry {
        action: "login".into(),
        actor: "jane".into(),
    };
    db.insert("audit_log", &entry).await.unwrap();

    let updated = AuditEntry {
        action: "logout".into(),
        actor: "jane".into(),
    };
    let affected = db
        .update("audit_log", &updated, Some("WHERE actor_name = 'jane'"))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    // With a key declared, the key value binds to the clause's placeholder.
    let user = User {
        name: "kim".into(),
        age: 40,
        ..User::default()
    };
    let id = db.insert("users", &user).await.unwrap();

    let user = User {
        id: id as u64,
        name: "kimberly".into(),
        age: 41,
        ..User::default()
    };
    let affected = db
        .update("users", &user, Some("WHERE id = ?"))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let users: Vec<User> = db.select("SELECT name, age FROM users", &[]).await.unwrap();
    assert_eq!(users[0].name, "kimberly");
    assert_eq!(users[0].age, 41);
}

#[tokio::test]
async fn update_without_key_or_where_fails() {
    let db = setup_db().await;
    create_tables(&db).await;

    let err = db
        .update("audit_log", &AuditEntry::default(), None)
        .await
        .unwrap_err();

    assert!(err.is_missing_primary_key());
}

#[tokio::test]
async fn undeclared_column_fails_scan() {
    let db = setup_db().await;
    create_tables(&db).await;

    db.insert("audit_log", &AuditEntry::default()).await.unwrap();

    let err = db
        .select::<AuditEntry>("SELECT action, actor_name, rowid FROM audit_log", &[])
        .await
        .unwrap_err();

    assert!(err.is_scan());
    assert_eq!(
        err.to_string(),
        "scan failed: expected 3 destination arguments in scan, not 2"
    );
}

#[tokio::test]
async fn out_of_range_value_fails_scan() {
    let db = setup_db().await;
    create_tables(&db).await;

    db.execute("INSERT INTO users (name, age) VALUES ('old', 300)")
        .await
        .unwrap();

    let err = db
        .select::<User>("SELECT age FROM users", &[])
        .await
        .unwrap_err();

    assert!(err.is_scan());
    assert!(err.root().is_type_conversion());
    assert_eq!(
        err.to_string(),
        "scan failed: column 0 (`age`) into field `age`: cannot convert I64 to u8"
    );
}

#[tokio::test]
async fn count_requires_result_row() {
    let db = setup_db().await;

    let err = db
        .count("SELECT 1 AS result WHERE 0", &[])
        .await
        .unwrap_err();
    assert!(err.is_invalid_result());

    let err = db.count("SELECT COUNT(*) FROM sqlite_master", &[]).await.unwrap_err();
    assert!(err.is_scan());
}

#[tokio::test]
async fn connect_rejects_unknown_scheme() {
    let err = Db::connect("postgresql://localhost/app").await.unwrap_err();
    assert!(err.is_invalid_connection_url());
}
