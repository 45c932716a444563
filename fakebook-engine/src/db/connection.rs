use anyhow::{Context, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use super::schema::{SCHEMA, TEST_DATA};
use crate::store::Snapshot;

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Open a connection pool on a file, or on ":memory:"
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let pool = if Self::is_memory_path(path.as_ref()) {
            // Every in-memory connection is its own database, so the pool
            // must hand out the same one each time.
            Pool::builder()
                .max_size(1)
                .build(SqliteConnectionManager::memory())
        } else {
            Pool::new(SqliteConnectionManager::file(path))
        }
        .context("Failed to create database connection pool")?;

        Ok(Self { pool })
    }

    fn is_memory_path(path: &Path) -> bool {
        path.to_string_lossy()
            .trim()
            .eq_ignore_ascii_case(MEMORY_DB_PATH)
    }

    /// Create an in-memory database pool (useful for testing)
    pub fn in_memory() -> Result<Self> {
        Self::new(MEMORY_DB_PATH)
    }

    /// Initialize the database schema
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Seed the database with the sample dataset
    pub fn seed_test_data(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(TEST_DATA)
            .context("Failed to seed test data")?;
        Ok(())
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .context("Failed to get database connection from pool")
    }

    /// Read every collection once into memory
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        Snapshot::load_from(self).context("Failed to load dataset snapshot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_creation() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");

        // Verify tables exist
        let conn = db.connection().expect("Failed to get connection");
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .expect("Failed to prepare statement");

        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .expect("Failed to query tables")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect tables");

        for table in [
            "users",
            "friends",
            "cities",
            "user_current_cities",
            "user_hometown_cities",
            "programs",
            "education",
            "user_events",
            "albums",
            "photos",
            "tags",
        ] {
            assert!(tables.contains(&table.to_string()), "missing table {}", table);
        }
    }

    #[test]
    fn test_seed_test_data() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.seed_test_data().expect("Failed to seed test data");

        let count: i64 = db
            .connection()
            .expect("Failed to get connection")
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("Failed to count users");
        assert_eq!(count, 8);

        // Seeding twice must not duplicate rows
        db.seed_test_data().expect("Failed to reseed test data");
        let count: i64 = db
            .connection()
            .expect("Failed to get connection")
            .query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))
            .expect("Failed to count tags");
        assert_eq!(count, 10);
    }

    #[test]
    fn test_friends_rejects_uncanonical_pairs() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");
        db.seed_test_data().expect("Failed to seed test data");

        let conn = db.connection().expect("Failed to get connection");
        let result = conn.execute("INSERT INTO friends (user1_id, user2_id) VALUES (4, 1)", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_memory_database_detection() {
        let memory_paths = [":memory:", " :memory: ", ":MEMORY:", " :Memory: "];

        for path in &memory_paths {
            assert!(Database::is_memory_path(Path::new(path)));
            let db = Database::new(path).expect("Failed to create memory database");
            db.initialize().expect("Failed to initialize schema");
        }

        assert!(!Database::is_memory_path(Path::new("fakebook.db")));
    }

    #[test]
    fn test_file_database() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("fakebook.db");

        let db = Database::new(&path).expect("Failed to create file database");
        db.initialize().expect("Failed to initialize file schema");
        db.seed_test_data().expect("Failed to seed file database");

        let reopened = Database::new(&path).expect("Failed to reopen file database");
        let snapshot = reopened.load_snapshot().expect("Failed to load snapshot");
        assert_eq!(snapshot.users.len(), 8);
        assert_eq!(snapshot.friendships.len(), 6);
    }
}
