use anyhow::{Context, Result};

use fakebook_types::{Education, Program};

use crate::db::DbPool;

pub struct EducationRepository {
    pool: DbPool,
}

impl EducationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn list_programs(&self) -> Result<Vec<Program>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT program_id, institution, concentration, degree FROM programs ORDER BY program_id",
        )?;

        let programs = stmt
            .query_map([], |row| {
                Ok(Program {
                    id: row.get(0)?,
                    institution: row.get(1)?,
                    concentration: row.get(2)?,
                    degree: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read programs")?;

        Ok(programs)
    }

    pub fn list_education(&self) -> Result<Vec<Education>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT user_id, program_id, program_year FROM education ORDER BY user_id, program_id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Education {
                    user_id: row.get(0)?,
                    program_id: row.get(1)?,
                    program_year: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read education")?;

        Ok(rows)
    }
}
