//! Small hand-checked dataset shared by the query unit tests.

use anyhow::{bail, Result};
use std::borrow::Cow;

use fakebook_types::*;

use crate::store::{DatasetStore, Snapshot};

pub fn user(
    id: UserId,
    first_name: &str,
    last_name: &str,
    gender: &str,
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
) -> User {
    User {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        gender: gender.to_string(),
        year_of_birth: year,
        month_of_birth: month,
        day_of_birth: day,
    }
}

pub fn city(id: CityId, name: &str, state_name: &str) -> City {
    City {
        id,
        name: name.to_string(),
        state_name: state_name.to_string(),
        country_name: Some("United States".to_string()),
    }
}

pub fn event(id: EventId, city_id: CityId) -> Event {
    Event {
        id,
        creator_id: 1,
        name: format!("Event {}", id),
        tagline: None,
        host: None,
        city_id,
    }
}

pub fn album(id: AlbumId, owner_id: UserId, name: &str) -> Album {
    Album {
        id,
        owner_id,
        name: name.to_string(),
    }
}

pub fn photo(id: PhotoId, album_id: AlbumId) -> Photo {
    Photo {
        id,
        album_id,
        link: format!("https://photos.example.com/{}", id),
        caption: None,
    }
}

pub fn tag(photo_id: PhotoId, subject_id: UserId) -> Tag {
    Tag {
        photo_id,
        subject_id,
    }
}

pub fn ids(users: &[UserInfo]) -> Vec<UserId> {
    users.iter().map(|u| u.id).collect()
}

/// Friend graph:
///
/// ```text
///   2 --- 4
///   |     |
///   1 --- 3        6, 7 have no friends
///   |
///   5 --- 8
/// ```
pub fn sample_snapshot() -> Snapshot {
    Snapshot {
        users: vec![
            user(1, "Alice", "Smith", "female", 1990, Some(1), Some(15)),
            user(2, "Bob", "Smith", "male", 1992, Some(3), Some(2)),
            user(3, "Carol", "Jones", "female", 1991, Some(1), Some(20)),
            user(4, "Dave", "Smith", "male", 1995, Some(3), Some(10)),
            user(5, "Eve", "Brown", "female", 1990, Some(7), Some(7)),
            user(6, "Frank", "Jones", "male", 1988, None, None),
            user(7, "Alice", "Green", "female", 1993, Some(3), Some(30)),
            user(8, "Christopher", "Lee", "male", 1985, Some(12), Some(1)),
        ],
        friendships: vec![
            Friendship::new(1, 2),
            Friendship::new(1, 3),
            Friendship::new(1, 5),
            Friendship::new(2, 4),
            Friendship::new(3, 4),
            Friendship::new(5, 8),
        ],
        cities: vec![
            city(1, "Ann Arbor", "Michigan"),
            city(2, "Detroit", "Michigan"),
            city(3, "Chicago", "Illinois"),
            city(4, "Columbus", "Ohio"),
        ],
        current_cities: vec![
            CurrentCity { user_id: 1, city_id: 1 },
            CurrentCity { user_id: 2, city_id: 2 },
            CurrentCity { user_id: 3, city_id: 3 },
            CurrentCity { user_id: 4, city_id: 2 },
            CurrentCity { user_id: 5, city_id: 1 },
        ],
        hometown_cities: vec![
            HometownCity { user_id: 1, city_id: 1 },
            HometownCity { user_id: 2, city_id: 2 },
            HometownCity { user_id: 3, city_id: 1 },
            HometownCity { user_id: 4, city_id: 2 },
            HometownCity { user_id: 6, city_id: 3 },
        ],
        programs: vec![Program {
            id: 1,
            institution: "University of Michigan".to_string(),
            concentration: "Computer Science".to_string(),
            degree: "BSE".to_string(),
        }],
        education: vec![Education {
            user_id: 1,
            program_id: 1,
            program_year: 2012,
        }],
        events: vec![event(1, 1), event(2, 2), event(3, 3), event(4, 4), event(5, 3)],
        albums: vec![album(100, 1, "Summer"), album(101, 3, "Graduation")],
        photos: vec![photo(10, 100), photo(11, 100), photo(12, 101), photo(13, 101)],
        tags: vec![
            tag(10, 1),
            tag(10, 3),
            tag(10, 5),
            tag(11, 1),
            tag(11, 3),
            tag(11, 5),
            tag(12, 2),
            tag(12, 4),
            tag(12, 1),
            tag(12, 7),
        ],
    }
}

/// A store whose backing source is unavailable
pub struct FailingStore;

impl FailingStore {
    fn fail<T: Clone>(&self, collection: &str) -> Result<Cow<'_, [T]>> {
        bail!("{} source unavailable", collection)
    }
}

impl DatasetStore for FailingStore {
    fn users(&self) -> Result<Cow<'_, [User]>> {
        self.fail("users")
    }

    fn friendships(&self) -> Result<Cow<'_, [Friendship]>> {
        self.fail("friendships")
    }

    fn cities(&self) -> Result<Cow<'_, [City]>> {
        self.fail("cities")
    }

    fn current_cities(&self) -> Result<Cow<'_, [CurrentCity]>> {
        self.fail("current_cities")
    }

    fn hometown_cities(&self) -> Result<Cow<'_, [HometownCity]>> {
        self.fail("hometown_cities")
    }

    fn programs(&self) -> Result<Cow<'_, [Program]>> {
        self.fail("programs")
    }

    fn education(&self) -> Result<Cow<'_, [Education]>> {
        self.fail("education")
    }

    fn events(&self) -> Result<Cow<'_, [Event]>> {
        self.fail("events")
    }

    fn albums(&self) -> Result<Cow<'_, [Album]>> {
        self.fail("albums")
    }

    fn photos(&self) -> Result<Cow<'_, [Photo]>> {
        self.fail("photos")
    }

    fn tags(&self) -> Result<Cow<'_, [Tag]>> {
        self.fail("tags")
    }
}
