use std::collections::{BTreeMap, HashMap};

use fakebook_types::{
    Album, AlbumId, MatchPair, Photo, PhotoId, PhotoInfo, TaggedPhotoInfo, User, UserId, UserInfo,
};

use super::{validate_count, QueryEngine};
use crate::error::{QueryError, QueryResult};
use crate::index::{albums_by_id, photos_by_id, users_by_id, FriendGraph, TagIndex};
use crate::store::DatasetStore;

/// Resolves a photo id to its row and containing album
struct PhotoCatalog<'a> {
    photos: HashMap<PhotoId, &'a Photo>,
    albums: HashMap<AlbumId, &'a Album>,
}

impl<'a> PhotoCatalog<'a> {
    fn new(photos: &'a [Photo], albums: &'a [Album]) -> Self {
        Self {
            photos: photos_by_id(photos),
            albums: albums_by_id(albums),
        }
    }

    fn info(&self, photo_id: PhotoId) -> Option<PhotoInfo> {
        let photo = self.photos.get(&photo_id)?;
        let album = self.albums.get(&photo.album_id)?;
        Some(PhotoInfo {
            photo_id: photo.id,
            album_id: album.id,
            link: photo.link.clone(),
            album_name: album.name.clone(),
        })
    }
}

impl<S: DatasetStore + ?Sized> QueryEngine<'_, S> {
    /// Top `count` photos by number of tagged users, ties broken by
    /// ascending photo id. Untagged photos never rank.
    pub fn most_tagged_photos(&self, count: i64) -> QueryResult<Vec<TaggedPhotoInfo>> {
        let limit = validate_count("count", count)?;

        let users = self.store.users()?;
        let photos = self.store.photos()?;
        let albums = self.store.albums()?;
        let tags = self.store.tags()?;

        let catalog = PhotoCatalog::new(&photos, &albums);
        let tag_index = TagIndex::build(&tags);
        let users = users_by_id(&users);

        let mut ranked: Vec<TaggedPhotoInfo> = tag_index
            .iter()
            .filter_map(|(photo_id, subjects)| {
                let tagged_users: Vec<UserInfo> = subjects
                    .iter()
                    .filter_map(|id| users.get(id).map(|user| UserInfo::from(*user)))
                    .collect();
                if tagged_users.is_empty() {
                    return None;
                }
                Some(TaggedPhotoInfo {
                    photo: catalog.info(photo_id)?,
                    tagged_users,
                })
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.tagged_users
                .len()
                .cmp(&a.tagged_users.len())
                .then(a.photo.photo_id.cmp(&b.photo.photo_id))
        });
        ranked.truncate(limit);

        tracing::debug!("Most tagged photos: returning {} (limit {})", ranked.len(), limit);
        Ok(ranked)
    }

    /// Pairs of same-gender users who are not friends, were tagged together
    /// at least once, and whose birth years differ by less than `year_diff`.
    /// Ranked by number of shared photos, then by ascending ids.
    pub fn potential_matches(&self, count: i64, year_diff: i64) -> QueryResult<Vec<MatchPair>> {
        let limit = validate_count("count", count)?;
        if year_diff < 0 {
            tracing::warn!("Rejected year_diff = {}", year_diff);
            return Err(QueryError::InvalidParameter {
                name: "year_diff",
                value: year_diff,
            });
        }

        let users = self.store.users()?;
        let friendships = self.store.friendships()?;
        let photos = self.store.photos()?;
        let albums = self.store.albums()?;
        let tags = self.store.tags()?;

        let catalog = PhotoCatalog::new(&photos, &albums);
        let graph = FriendGraph::build(&friendships);
        let tag_index = TagIndex::build(&tags);
        let users = users_by_id(&users);

        let qualifies = |a: &User, b: &User| {
            a.gender == b.gender
                && (i64::from(a.year_of_birth) - i64::from(b.year_of_birth)).abs() < year_diff
                && !graph.are_friends(a.id, b.id)
        };

        // Photos are visited in ascending id order, so each pair's list
        // comes out sorted.
        let mut shared: BTreeMap<(UserId, UserId), MatchPair> = BTreeMap::new();
        for (photo_id, subjects) in tag_index.iter() {
            let Some(info) = catalog.info(photo_id) else {
                continue;
            };
            let tagged: Vec<&User> = subjects
                .iter()
                .filter_map(|id| users.get(id).copied())
                .collect();
            for (i, a) in tagged.iter().enumerate() {
                for b in &tagged[i + 1..] {
                    if !qualifies(*a, *b) {
                        continue;
                    }
                    shared
                        .entry((a.id, b.id))
                        .or_insert_with(|| MatchPair {
                            user1: UserInfo::from(*a),
                            user1_birth_year: a.year_of_birth,
                            user2: UserInfo::from(*b),
                            user2_birth_year: b.year_of_birth,
                            shared_photos: Vec::new(),
                        })
                        .shared_photos
                        .push(info.clone());
                }
            }
        }

        let mut ranked: Vec<MatchPair> = shared.into_values().collect();
        ranked.sort_by(|a, b| {
            b.shared_photos
                .len()
                .cmp(&a.shared_photos.len())
                .then((a.user1.id, a.user2.id).cmp(&(b.user1.id, b.user2.id)))
        });
        ranked.truncate(limit);

        tracing::debug!(
            "Potential matches: returning {} (limit {}, year_diff {})",
            ranked.len(),
            limit,
            year_diff
        );
        Ok(ranked)
    }
}
