use anyhow::{Context, Result};
use rusqlite::Row;

use fakebook_types::User;

use crate::db::DbPool;

const USER_COLUMNS: &str =
    "user_id, first_name, last_name, gender, year_of_birth, month_of_birth, day_of_birth";

fn map_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        gender: row.get(3)?,
        year_of_birth: row.get(4)?,
        month_of_birth: row.get(5)?,
        day_of_birth: row.get(6)?,
    })
}

pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get all users, ordered by id
    pub fn list_all(&self) -> Result<Vec<User>> {
        let conn = self.pool.get()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM users ORDER BY user_id", USER_COLUMNS))
            .context("Failed to prepare user query")?;

        let users = stmt
            .query_map([], map_user)?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read users")?;

        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use fakebook_types::UserId;

    fn setup_test_db() -> (Database, UserRepository) {
        let db = Database::in_memory().expect("Failed to create test database");
        db.initialize().expect("Failed to initialize schema");
        db.seed_test_data().expect("Failed to seed test data");
        let repo = UserRepository::new(db.pool.clone());
        (db, repo)
    }

    #[test]
    fn test_list_all_ordered_by_id() {
        let (_db, repo) = setup_test_db();
        let users = repo.list_all().unwrap();
        let ids: Vec<UserId> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_missing_birth_parts_read_as_none() {
        let (_db, repo) = setup_test_db();
        let users = repo.list_all().unwrap();

        let frank = &users[5];
        assert_eq!(frank.first_name, "Frank");
        assert_eq!(frank.year_of_birth, 1988);
        assert_eq!(frank.month_of_birth, None);
        assert_eq!(frank.day_of_birth, None);

        let alice = &users[0];
        assert_eq!(alice.month_of_birth, Some(1));
        assert_eq!(alice.day_of_birth, Some(15));
    }
}
