use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use fakebook_types::{Album, AlbumId, Friendship, Photo, PhotoId, Tag, User, UserId};

/// Index users by id
pub fn users_by_id(users: &[User]) -> HashMap<UserId, &User> {
    users.iter().map(|user| (user.id, user)).collect()
}

pub fn photos_by_id(photos: &[Photo]) -> HashMap<PhotoId, &Photo> {
    photos.iter().map(|photo| (photo.id, photo)).collect()
}

pub fn albums_by_id(albums: &[Album]) -> HashMap<AlbumId, &Album> {
    albums.iter().map(|album| (album.id, album)).collect()
}

/// Undirected friendship graph.
///
/// Every pair is stored once as a canonical `(min, max)` key, and each user
/// maps to an ascending set of friend ids.
#[derive(Debug, Default)]
pub struct FriendGraph {
    pairs: HashSet<Friendship>,
    adjacency: HashMap<UserId, BTreeSet<UserId>>,
}

impl FriendGraph {
    pub fn build(friendships: &[Friendship]) -> Self {
        let mut graph = Self::default();
        for row in friendships {
            let pair = Friendship::new(row.user1_id, row.user2_id);
            if pair.user1_id == pair.user2_id || !graph.pairs.insert(pair) {
                continue;
            }
            graph
                .adjacency
                .entry(pair.user1_id)
                .or_default()
                .insert(pair.user2_id);
            graph
                .adjacency
                .entry(pair.user2_id)
                .or_default()
                .insert(pair.user1_id);
        }
        graph
    }

    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.pairs.contains(&Friendship::new(a, b))
    }

    pub fn has_friends(&self, user_id: UserId) -> bool {
        self.adjacency.contains_key(&user_id)
    }

    /// Friends of `user_id` in ascending id order
    pub fn friends_of(&self, user_id: UserId) -> impl Iterator<Item = UserId> + '_ {
        self.adjacency
            .get(&user_id)
            .into_iter()
            .flat_map(|friends| friends.iter().copied())
    }

    /// Iterate over each user and their ascending friend set
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &BTreeSet<UserId>)> {
        self.adjacency.iter().map(|(id, friends)| (*id, friends))
    }

    /// Canonical friendship pairs, in no particular order
    pub fn pairs(&self) -> impl Iterator<Item = Friendship> + '_ {
        self.pairs.iter().copied()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

/// Tagged subjects grouped by photo, both in ascending id order
#[derive(Debug, Default)]
pub struct TagIndex {
    subjects_by_photo: BTreeMap<PhotoId, BTreeSet<UserId>>,
}

impl TagIndex {
    pub fn build(tags: &[Tag]) -> Self {
        let mut subjects_by_photo: BTreeMap<PhotoId, BTreeSet<UserId>> = BTreeMap::new();
        for tag in tags {
            subjects_by_photo
                .entry(tag.photo_id)
                .or_default()
                .insert(tag.subject_id);
        }
        Self { subjects_by_photo }
    }

    pub fn subjects(&self, photo_id: PhotoId) -> impl Iterator<Item = UserId> + '_ {
        self.subjects_by_photo
            .get(&photo_id)
            .into_iter()
            .flat_map(|subjects| subjects.iter().copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PhotoId, &BTreeSet<UserId>)> {
        self.subjects_by_photo
            .iter()
            .map(|(photo_id, subjects)| (*photo_id, subjects))
    }
}
