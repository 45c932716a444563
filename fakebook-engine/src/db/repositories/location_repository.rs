use anyhow::{Context, Result};

use fakebook_types::{City, CurrentCity, HometownCity};

use crate::db::DbPool;

/// Cities and the user-to-city mappings
pub struct LocationRepository {
    pool: DbPool,
}

impl LocationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn list_cities(&self) -> Result<Vec<City>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT city_id, city_name, state_name, country_name FROM cities ORDER BY city_id",
        )?;

        let cities = stmt
            .query_map([], |row| {
                Ok(City {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    state_name: row.get(2)?,
                    country_name: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read cities")?;

        Ok(cities)
    }

    pub fn list_current_cities(&self) -> Result<Vec<CurrentCity>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT user_id, current_city_id FROM user_current_cities ORDER BY user_id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(CurrentCity {
                    user_id: row.get(0)?,
                    city_id: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read current cities")?;

        Ok(rows)
    }

    pub fn list_hometown_cities(&self) -> Result<Vec<HometownCity>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT user_id, hometown_city_id FROM user_hometown_cities ORDER BY user_id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(HometownCity {
                    user_id: row.get(0)?,
                    city_id: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read hometown cities")?;

        Ok(rows)
    }
}
