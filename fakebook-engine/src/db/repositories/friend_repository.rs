use anyhow::{Context, Result};

use fakebook_types::Friendship;

use crate::db::DbPool;

pub struct FriendRepository {
    pool: DbPool,
}

impl FriendRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get every friendship pair, canonicalized
    pub fn list_all(&self) -> Result<Vec<Friendship>> {
        let conn = self.pool.get()?;
        let mut stmt = conn
            .prepare("SELECT user1_id, user2_id FROM friends ORDER BY user1_id, user2_id")
            .context("Failed to prepare friendship query")?;

        let friendships = stmt
            .query_map([], |row| {
                Ok(Friendship::new(row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read friendships")?;

        Ok(friendships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn setup_test_db() -> (Database, FriendRepository) {
        let db = Database::in_memory().expect("Failed to create test database");
        db.initialize().expect("Failed to initialize schema");
        db.seed_test_data().expect("Failed to seed test data");
        let repo = FriendRepository::new(db.pool.clone());
        (db, repo)
    }

    #[test]
    fn test_list_all() {
        let (_db, repo) = setup_test_db();
        let friendships = repo.list_all().unwrap();
        assert_eq!(friendships.len(), 6);
        assert!(friendships.iter().all(|f| f.user1_id < f.user2_id));
        assert_eq!(friendships[0], Friendship::new(1, 2));
    }
}
