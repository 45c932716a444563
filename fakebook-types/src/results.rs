use serde::{Deserialize, Serialize};

use crate::models::{AlbumId, PhotoId, User, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// Birth month distribution over users with a known month
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMonthInfo {
    pub total: u64,
    /// `None` when no user has a known birth month
    pub most_month: Option<u32>,
    pub least_month: Option<u32>,
    pub most_month_users: Vec<UserInfo>,
    pub least_month_users: Vec<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstNameInfo {
    /// Ascending by name
    pub long_names: Vec<String>,
    /// Ascending by name
    pub short_names: Vec<String>,
    /// Descending by name
    pub common_names: Vec<String>,
    pub common_name_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoInfo {
    pub photo_id: PhotoId,
    pub album_id: AlbumId,
    pub link: String,
    pub album_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedPhotoInfo {
    pub photo: PhotoInfo,
    pub tagged_users: Vec<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub user1: UserInfo,
    pub user1_birth_year: i32,
    pub user2: UserInfo,
    pub user2_birth_year: i32,
    pub shared_photos: Vec<PhotoInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPair {
    pub user1: UserInfo,
    pub user2: UserInfo,
    pub shared_friends: Vec<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStateInfo {
    pub event_count: u64,
    /// Ascending by state name
    pub states: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeInfo {
    pub oldest: UserInfo,
    pub youngest: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingInfo {
    pub user1: UserInfo,
    pub user2: UserInfo,
}
