use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use fakebook_types::{AgeInfo, CityId, SiblingInfo, User, UserId, UserInfo, UsersPair};

use super::{validate_count, QueryEngine};
use crate::error::{QueryError, QueryResult};
use crate::index::{users_by_id, FriendGraph};
use crate::store::DatasetStore;

/// Birth years of potential siblings must be closer than this
const SIBLING_MAX_YEAR_GAP: i64 = 10;

impl<S: DatasetStore + ?Sized> QueryEngine<'_, S> {
    /// Top `count` pairs of non-friends ranked by how many friends they have
    /// in common, ties broken by ascending ids.
    pub fn suggest_friends(&self, count: i64) -> QueryResult<Vec<UsersPair>> {
        let limit = validate_count("count", count)?;

        let users = self.store.users()?;
        let friendships = self.store.friendships()?;
        let users = users_by_id(&users);
        let graph = FriendGraph::build(&friendships);

        // Every user in the middle links each pair of their own friends
        let mut mutual: BTreeMap<(UserId, UserId), UsersPair> = BTreeMap::new();
        for (middle, friends) in graph.iter() {
            let Some(middle) = users.get(&middle).copied() else {
                continue;
            };
            let friends: Vec<&User> = friends
                .iter()
                .filter_map(|id| users.get(id).copied())
                .collect();
            for (i, a) in friends.iter().enumerate() {
                for b in &friends[i + 1..] {
                    if graph.are_friends(a.id, b.id) {
                        continue;
                    }
                    mutual
                        .entry((a.id, b.id))
                        .or_insert_with(|| UsersPair {
                            user1: UserInfo::from(*a),
                            user2: UserInfo::from(*b),
                            shared_friends: Vec::new(),
                        })
                        .shared_friends
                        .push(UserInfo::from(middle));
                }
            }
        }

        tracing::debug!(
            "Friend suggestions: {} candidate pairs over {} friendships",
            mutual.len(),
            graph.pair_count()
        );

        let mut ranked: Vec<UsersPair> = mutual.into_values().collect();
        ranked.sort_by(|a, b| {
            b.shared_friends
                .len()
                .cmp(&a.shared_friends.len())
                .then((a.user1.id, a.user2.id).cmp(&(b.user1.id, b.user2.id)))
        });
        ranked.truncate(limit);

        // Middle users arrive in adjacency order
        for pair in &mut ranked {
            pair.shared_friends.sort_unstable_by_key(|friend| friend.id);
        }
        Ok(ranked)
    }

    /// Oldest and youngest friend of `user_id`.
    ///
    /// Birth dates compare by year, month, then day; a missing month or day
    /// sorts after any known one. When two friends share the same date the
    /// higher id wins, in both directions.
    pub fn friend_age_extremes(&self, user_id: UserId) -> QueryResult<AgeInfo> {
        let users = self.store.users()?;
        let friendships = self.store.friendships()?;
        let users = users_by_id(&users);

        if !users.contains_key(&user_id) {
            tracing::warn!("Age extremes requested for unknown user {}", user_id);
            return Err(QueryError::UserNotFound(user_id));
        }

        let graph = FriendGraph::build(&friendships);
        let friends: Vec<&User> = graph
            .friends_of(user_id)
            .filter_map(|id| users.get(&id).copied())
            .collect();

        let oldest = friends
            .iter()
            .min_by_key(|friend| (friend.birth_key(), Reverse(friend.id)));
        let youngest = friends
            .iter()
            .max_by_key(|friend| (friend.birth_key(), friend.id));

        match (oldest, youngest) {
            (Some(oldest), Some(youngest)) => Ok(AgeInfo {
                oldest: UserInfo::from(*oldest),
                youngest: UserInfo::from(*youngest),
            }),
            _ => Err(QueryError::NoFriends(user_id)),
        }
    }

    /// Friends sharing a last name and hometown whose birth years are less
    /// than ten apart, ordered by ascending ids.
    pub fn potential_siblings(&self) -> QueryResult<Vec<SiblingInfo>> {
        let users = self.store.users()?;
        let friendships = self.store.friendships()?;
        let hometown: HashMap<UserId, CityId> = self
            .store
            .hometown_cities()?
            .iter()
            .map(|row| (row.user_id, row.city_id))
            .collect();
        let users = users_by_id(&users);
        let graph = FriendGraph::build(&friendships);

        let same_hometown = |a: UserId, b: UserId| match (hometown.get(&a), hometown.get(&b)) {
            (Some(ha), Some(hb)) => ha == hb,
            _ => false,
        };

        let mut pairs: Vec<(&User, &User)> = graph
            .pairs()
            .filter_map(|pair| Some((*users.get(&pair.user1_id)?, *users.get(&pair.user2_id)?)))
            .filter(|(a, b)| {
                a.last_name == b.last_name
                    && (i64::from(a.year_of_birth) - i64::from(b.year_of_birth)).abs()
                        < SIBLING_MAX_YEAR_GAP
                    && same_hometown(a.id, b.id)
            })
            .collect();
        pairs.sort_by_key(|(a, b)| (a.id, b.id));

        Ok(pairs
            .into_iter()
            .map(|(a, b)| SiblingInfo {
                user1: UserInfo::from(a),
                user2: UserInfo::from(b),
            })
            .collect())
    }
}
