use anyhow::{Context, Result};

use fakebook_types::Event;

use crate::db::DbPool;

pub struct EventRepository {
    pool: DbPool,
}

impl EventRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn list_all(&self) -> Result<Vec<Event>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT event_id, event_creator_id, event_name, event_tagline, event_host, event_city_id
             FROM user_events
             ORDER BY event_id",
        )?;

        let events = stmt
            .query_map([], |row| {
                Ok(Event {
                    id: row.get(0)?,
                    creator_id: row.get(1)?,
                    name: row.get(2)?,
                    tagline: row.get(3)?,
                    host: row.get(4)?,
                    city_id: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read events")?;

        Ok(events)
    }
}
