pub mod connection;
pub mod repositories;
pub mod schema;

pub use connection::{Database, DbConnection, DbPool};

use anyhow::Result;
use std::borrow::Cow;

use fakebook_types::{
    Album, City, CurrentCity, Education, Event, Friendship, HometownCity, Photo, Program, Tag,
    User,
};

use crate::store::DatasetStore;
use repositories::{
    EducationRepository, EventRepository, FriendRepository, LocationRepository, PhotoRepository,
    UserRepository,
};

/// Live access: every collection is read from SQLite when asked for
impl DatasetStore for Database {
    fn users(&self) -> Result<Cow<'_, [User]>> {
        Ok(Cow::Owned(UserRepository::new(self.pool.clone()).list_all()?))
    }

    fn friendships(&self) -> Result<Cow<'_, [Friendship]>> {
        Ok(Cow::Owned(FriendRepository::new(self.pool.clone()).list_all()?))
    }

    fn cities(&self) -> Result<Cow<'_, [City]>> {
        Ok(Cow::Owned(LocationRepository::new(self.pool.clone()).list_cities()?))
    }

    fn current_cities(&self) -> Result<Cow<'_, [CurrentCity]>> {
        Ok(Cow::Owned(
            LocationRepository::new(self.pool.clone()).list_current_cities()?,
        ))
    }

    fn hometown_cities(&self) -> Result<Cow<'_, [HometownCity]>> {
        Ok(Cow::Owned(
            LocationRepository::new(self.pool.clone()).list_hometown_cities()?,
        ))
    }

    fn programs(&self) -> Result<Cow<'_, [Program]>> {
        Ok(Cow::Owned(EducationRepository::new(self.pool.clone()).list_programs()?))
    }

    fn education(&self) -> Result<Cow<'_, [Education]>> {
        Ok(Cow::Owned(EducationRepository::new(self.pool.clone()).list_education()?))
    }

    fn events(&self) -> Result<Cow<'_, [Event]>> {
        Ok(Cow::Owned(EventRepository::new(self.pool.clone()).list_all()?))
    }

    fn albums(&self) -> Result<Cow<'_, [Album]>> {
        Ok(Cow::Owned(PhotoRepository::new(self.pool.clone()).list_albums()?))
    }

    fn photos(&self) -> Result<Cow<'_, [Photo]>> {
        Ok(Cow::Owned(PhotoRepository::new(self.pool.clone()).list_photos()?))
    }

    fn tags(&self) -> Result<Cow<'_, [Tag]>> {
        Ok(Cow::Owned(PhotoRepository::new(self.pool.clone()).list_tags()?))
    }
}
