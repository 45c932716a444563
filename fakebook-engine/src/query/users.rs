use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use fakebook_types::{BirthMonthInfo, CityId, FirstNameInfo, User, UserId, UserInfo};

use super::QueryEngine;
use crate::error::QueryResult;
use crate::index::FriendGraph;
use crate::store::DatasetStore;

/// Users matching `predicate`, ascending by id
fn collect_sorted<'u>(
    users: impl Iterator<Item = &'u User>,
    predicate: impl Fn(&User) -> bool,
) -> Vec<UserInfo> {
    let mut selected: Vec<UserInfo> = users
        .filter(|user| predicate(*user))
        .map(UserInfo::from)
        .collect();
    selected.sort_by_key(|user| user.id);
    selected
}

impl<S: DatasetStore + ?Sized> QueryEngine<'_, S> {
    /// Birth month with the most users and the one with the fewest (but at
    /// least one), with everyone born in each. Ties go to the smaller month.
    pub fn birth_month_summary(&self) -> QueryResult<BirthMonthInfo> {
        let users = self.store.users()?;

        let mut per_month: BTreeMap<u32, u64> = BTreeMap::new();
        for month in users.iter().filter_map(|user| user.month_of_birth) {
            *per_month.entry(month).or_default() += 1;
        }

        let total = per_month.values().sum();
        let most_month = per_month
            .iter()
            .max_by_key(|(month, count)| (**count, Reverse(**month)))
            .map(|(month, _)| *month);
        let least_month = per_month
            .iter()
            .min_by_key(|(month, count)| (**count, **month))
            .map(|(month, _)| *month);

        let born_in = |month: Option<u32>| match month {
            Some(month) => collect_sorted(users.iter(), |user| {
                user.month_of_birth == Some(month)
            }),
            None => Vec::new(),
        };

        tracing::debug!(
            "Birth months: {} users across {} months",
            total,
            per_month.len()
        );

        Ok(BirthMonthInfo {
            total,
            most_month,
            least_month,
            most_month_users: born_in(most_month),
            least_month_users: born_in(least_month),
        })
    }

    /// Longest, shortest and most common first names over distinct names
    pub fn first_name_stats(&self) -> QueryResult<FirstNameInfo> {
        let users = self.store.users()?;

        let mut occurrences: BTreeMap<&str, u64> = BTreeMap::new();
        for user in users.iter() {
            *occurrences.entry(user.first_name.as_str()).or_default() += 1;
        }

        let lengths: Vec<(&str, usize)> = occurrences
            .keys()
            .map(|name| (*name, name.chars().count()))
            .collect();
        let longest = lengths.iter().map(|(_, len)| *len).max();
        let shortest = lengths.iter().map(|(_, len)| *len).min();

        let names_of_length = |target: Option<usize>| -> Vec<String> {
            lengths
                .iter()
                .filter(|(_, len)| Some(*len) == target)
                .map(|(name, _)| name.to_string())
                .collect()
        };

        let common_name_count = occurrences.values().copied().max().unwrap_or(0);
        let common_names = occurrences
            .iter()
            .rev()
            .filter(|(_, count)| **count == common_name_count)
            .map(|(name, _)| name.to_string())
            .collect();

        Ok(FirstNameInfo {
            long_names: names_of_length(longest),
            short_names: names_of_length(shortest),
            common_names,
            common_name_count,
        })
    }

    /// Users that appear in no friendship at all
    pub fn friendless_users(&self) -> QueryResult<Vec<UserInfo>> {
        let users = self.store.users()?;
        let friendships = self.store.friendships()?;
        let graph = FriendGraph::build(&friendships);

        let friendless = collect_sorted(users.iter(), |user| !graph.has_friends(user.id));
        tracing::debug!("{} of {} users have no friends", friendless.len(), users.len());
        Ok(friendless)
    }

    /// Users whose current city differs from their hometown. Users missing
    /// either city are left out.
    pub fn relocated_users(&self) -> QueryResult<Vec<UserInfo>> {
        let users = self.store.users()?;
        let current: HashMap<UserId, CityId> = self
            .store
            .current_cities()?
            .iter()
            .map(|row| (row.user_id, row.city_id))
            .collect();
        let hometown: HashMap<UserId, CityId> = self
            .store
            .hometown_cities()?
            .iter()
            .map(|row| (row.user_id, row.city_id))
            .collect();

        Ok(collect_sorted(users.iter(), |user| {
            match (current.get(&user.id), hometown.get(&user.id)) {
                (Some(now), Some(home)) => now != home,
                _ => false,
            }
        }))
    }
}
