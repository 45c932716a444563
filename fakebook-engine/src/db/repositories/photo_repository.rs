use anyhow::{Context, Result};

use fakebook_types::{Album, Photo, Tag};

use crate::db::DbPool;

/// Albums, photos, and the tags placed on them
pub struct PhotoRepository {
    pool: DbPool,
}

impl PhotoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn list_albums(&self) -> Result<Vec<Album>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT album_id, album_owner_id, album_name FROM albums ORDER BY album_id",
        )?;

        let albums = stmt
            .query_map([], |row| {
                Ok(Album {
                    id: row.get(0)?,
                    owner_id: row.get(1)?,
                    name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read albums")?;

        Ok(albums)
    }

    pub fn list_photos(&self) -> Result<Vec<Photo>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT photo_id, album_id, photo_link, photo_caption FROM photos ORDER BY photo_id",
        )?;

        let photos = stmt
            .query_map([], |row| {
                Ok(Photo {
                    id: row.get(0)?,
                    album_id: row.get(1)?,
                    link: row.get(2)?,
                    caption: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read photos")?;

        Ok(photos)
    }

    pub fn list_tags(&self) -> Result<Vec<Tag>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT tag_photo_id, tag_subject_id FROM tags ORDER BY tag_photo_id, tag_subject_id",
        )?;

        let tags = stmt
            .query_map([], |row| {
                Ok(Tag {
                    photo_id: row.get(0)?,
                    subject_id: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read tags")?;

        Ok(tags)
    }
}
