use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type CityId = i64;
pub type ProgramId = i64;
pub type EventId = i64;
pub type AlbumId = i64;
pub type PhotoId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub year_of_birth: i32,
    #[serde(default)]
    pub month_of_birth: Option<u32>,
    #[serde(default)]
    pub day_of_birth: Option<u32>,
}

impl User {
    /// Sort key for birth dates. A missing month or day orders after any
    /// known value within the same year.
    pub fn birth_key(&self) -> (i32, bool, Option<u32>, bool, Option<u32>) {
        (
            self.year_of_birth,
            self.month_of_birth.is_none(),
            self.month_of_birth,
            self.day_of_birth.is_none(),
            self.day_of_birth,
        )
    }
}

/// An unordered friendship, always stored with `user1_id < user2_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Friendship {
    pub user1_id: UserId,
    pub user2_id: UserId,
}

impl Friendship {
    /// Build the canonical pair regardless of argument order
    pub fn new(a: UserId, b: UserId) -> Self {
        Self {
            user1_id: a.min(b),
            user2_id: a.max(b),
        }
    }

    pub fn involves(&self, user_id: UserId) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    /// The other side of the pair, if `user_id` is part of it
    pub fn other(&self, user_id: UserId) -> Option<UserId> {
        if self.user1_id == user_id {
            Some(self.user2_id)
        } else if self.user2_id == user_id {
            Some(self.user1_id)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub state_name: String,
    #[serde(default)]
    pub country_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentCity {
    pub user_id: UserId,
    pub city_id: CityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HometownCity {
    pub user_id: UserId,
    pub city_id: CityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub institution: String,
    pub concentration: String,
    pub degree: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub user_id: UserId,
    pub program_id: ProgramId,
    pub program_year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub creator_id: UserId,
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    pub city_id: CityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub owner_id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub album_id: AlbumId,
    pub link: String,
    #[serde(default)]
    pub caption: Option<String>,
}

/// A user tagged in a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub photo_id: PhotoId,
    pub subject_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId, year: i32, month: Option<u32>, day: Option<u32>) -> User {
        User {
            id,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            gender: "female".to_string(),
            year_of_birth: year,
            month_of_birth: month,
            day_of_birth: day,
        }
    }

    #[test]
    fn test_friendship_is_canonical() {
        assert_eq!(Friendship::new(7, 3), Friendship::new(3, 7));
        let f = Friendship::new(9, 2);
        assert_eq!(f.user1_id, 2);
        assert_eq!(f.user2_id, 9);
    }

    #[test]
    fn test_friendship_other_side() {
        let f = Friendship::new(4, 11);
        assert_eq!(f.other(4), Some(11));
        assert_eq!(f.other(11), Some(4));
        assert_eq!(f.other(5), None);
        assert!(f.involves(11));
        assert!(!f.involves(5));
    }

    #[test]
    fn test_birth_key_orders_missing_parts_last() {
        let known = user(1, 1990, Some(12), Some(31));
        let no_day = user(2, 1990, Some(12), None);
        let no_month = user(3, 1990, None, None);
        let next_year = user(4, 1991, Some(1), Some(1));

        assert!(known.birth_key() < no_day.birth_key());
        assert!(no_day.birth_key() < no_month.birth_key());
        assert!(no_month.birth_key() < next_year.birth_key());
    }

    #[test]
    fn test_user_deserializes_without_month_and_day() {
        let json = r#"{"id":1,"first_name":"Ada","last_name":"King","gender":"female","year_of_birth":1815}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.month_of_birth, None);
        assert_eq!(user.day_of_birth, None);
    }
}
