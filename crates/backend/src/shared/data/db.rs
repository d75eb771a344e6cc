use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Open the SQLite file, bootstrap the schema and keep the connection for the
/// whole process.
pub async fn initialize_database(db_path: &Path) -> anyhow::Result<()> {
    let conn = connect(db_path).await?;
    ensure_schema(&conn).await?;
    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;
    Ok(())
}

pub async fn connect(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Connecting to database {}", db_url);
    Ok(Database::connect(&db_url).await?)
}

/// Minimal schema bootstrap
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let check_storage_table = r#"
        SELECT name FROM sqlite_master
        WHERE type='table' AND name='sys_storage';
    "#;
    let storage_table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_storage_table.to_string(),
        ))
        .await?;

    if storage_table_exists.is_empty() {
        tracing::info!("Creating sys_storage table");
        let create_storage_table_sql = r#"
            CREATE TABLE sys_storage (
                "key" TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_storage_table_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
