use anyhow::Result;
use std::borrow::Cow;

use fakebook_types::{
    Album, City, CurrentCity, Education, Event, Friendship, HometownCity, Photo, Program, Tag,
    User,
};

/// Read-only access to the entity collections of one dataset.
///
/// Implementations may hand out borrowed rows from memory or owned rows
/// fetched on demand. Any `Err` is treated by the engine as a data-access
/// fault.
pub trait DatasetStore {
    fn users(&self) -> Result<Cow<'_, [User]>>;

    fn friendships(&self) -> Result<Cow<'_, [Friendship]>>;

    fn cities(&self) -> Result<Cow<'_, [City]>>;

    fn current_cities(&self) -> Result<Cow<'_, [CurrentCity]>>;

    fn hometown_cities(&self) -> Result<Cow<'_, [HometownCity]>>;

    fn programs(&self) -> Result<Cow<'_, [Program]>>;

    fn education(&self) -> Result<Cow<'_, [Education]>>;

    fn events(&self) -> Result<Cow<'_, [Event]>>;

    fn albums(&self) -> Result<Cow<'_, [Album]>>;

    fn photos(&self) -> Result<Cow<'_, [Photo]>>;

    fn tags(&self) -> Result<Cow<'_, [Tag]>>;
}

/// Fully materialized dataset held in memory
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub friendships: Vec<Friendship>,
    pub cities: Vec<City>,
    pub current_cities: Vec<CurrentCity>,
    pub hometown_cities: Vec<HometownCity>,
    pub programs: Vec<Program>,
    pub education: Vec<Education>,
    pub events: Vec<Event>,
    pub albums: Vec<Album>,
    pub photos: Vec<Photo>,
    pub tags: Vec<Tag>,
}

impl Snapshot {
    /// Copy every collection out of another store
    pub fn load_from<S: DatasetStore + ?Sized>(store: &S) -> Result<Self> {
        let snapshot = Self {
            users: store.users()?.into_owned(),
            friendships: store.friendships()?.into_owned(),
            cities: store.cities()?.into_owned(),
            current_cities: store.current_cities()?.into_owned(),
            hometown_cities: store.hometown_cities()?.into_owned(),
            programs: store.programs()?.into_owned(),
            education: store.education()?.into_owned(),
            events: store.events()?.into_owned(),
            albums: store.albums()?.into_owned(),
            photos: store.photos()?.into_owned(),
            tags: store.tags()?.into_owned(),
        };

        tracing::debug!(
            "Loaded snapshot: {} users, {} friendships, {} photos, {} tags, {} events",
            snapshot.users.len(),
            snapshot.friendships.len(),
            snapshot.photos.len(),
            snapshot.tags.len(),
            snapshot.events.len()
        );

        Ok(snapshot)
    }
}

impl DatasetStore for Snapshot {
    fn users(&self) -> Result<Cow<'_, [User]>> {
        Ok(Cow::Borrowed(&self.users))
    }

    fn friendships(&self) -> Result<Cow<'_, [Friendship]>> {
        Ok(Cow::Borrowed(&self.friendships))
    }

    fn cities(&self) -> Result<Cow<'_, [City]>> {
        Ok(Cow::Borrowed(&self.cities))
    }

    fn current_cities(&self) -> Result<Cow<'_, [CurrentCity]>> {
        Ok(Cow::Borrowed(&self.current_cities))
    }

    fn hometown_cities(&self) -> Result<Cow<'_, [HometownCity]>> {
        Ok(Cow::Borrowed(&self.hometown_cities))
    }

    fn programs(&self) -> Result<Cow<'_, [Program]>> {
        Ok(Cow::Borrowed(&self.programs))
    }

    fn education(&self) -> Result<Cow<'_, [Education]>> {
        Ok(Cow::Borrowed(&self.education))
    }

    fn events(&self) -> Result<Cow<'_, [Event]>> {
        Ok(Cow::Borrowed(&self.events))
    }

    fn albums(&self) -> Result<Cow<'_, [Album]>> {
        Ok(Cow::Borrowed(&self.albums))
    }

    fn photos(&self) -> Result<Cow<'_, [Photo]>> {
        Ok(Cow::Borrowed(&self.photos))
    }

    fn tags(&self) -> Result<Cow<'_, [Tag]>> {
        Ok(Cow::Borrowed(&self.tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_hands_out_borrowed_rows() {
        let snapshot = Snapshot {
            friendships: vec![Friendship::new(2, 1)],
            ..Default::default()
        };

        let rows = snapshot.friendships().unwrap();
        assert!(matches!(rows, Cow::Borrowed(_)));
        assert_eq!(rows[0], Friendship::new(1, 2));
    }

    #[test]
    fn test_load_from_copies_every_collection() {
        let source = Snapshot {
            tags: vec![Tag { photo_id: 1, subject_id: 2 }],
            friendships: vec![Friendship::new(1, 2)],
            ..Default::default()
        };

        let copy = Snapshot::load_from(&source).unwrap();
        assert_eq!(copy.tags, source.tags);
        assert_eq!(copy.friendships, source.friendships);
        assert!(copy.users.is_empty());
    }
}
