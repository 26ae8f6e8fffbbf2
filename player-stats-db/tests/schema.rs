use player_stats_db::schema::{CURRENT_VERSION, create_schema, get_schema_version};
use player_stats_db::{SchemaError, open_database, open_memory};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
    create_schema(&conn).unwrap();

    let rows: i32 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn players_table_has_exactly_the_record_columns() {
    let conn = open_memory().unwrap();
    let mut stmt = conn.prepare("PRAGMA table_info(players)").unwrap();
    let columns: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        columns,
        vec!["id", "name", "position", "rating", "club", "nation"]
    );
}

#[test]
fn rating_check_constraint_is_a_backstop() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO players (name, position, rating, club, nation) VALUES ('X', 'ST', 150, 'C', 'N')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn reopen_file_database_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO players (name, position, rating, club, nation) VALUES ('X', 'ST', 80, 'C', 'N')",
            [],
        )
        .unwrap();
    }
    let conn = open_database(&path).unwrap();
    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("players.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }
    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, CURRENT_VERSION + 1);
        }
        other => panic!("expected version mismatch, got {other:?}"),
    }
}
