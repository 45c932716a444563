//! The analytical queries.
//!
//! Each query is a pure read over the store: it pulls the collections it
//! needs, builds in-memory indices once, and joins over those. Nothing is
//! cached between calls, so several queries may run against the same store
//! concurrently.

mod events;
mod photos;
mod social;
mod users;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::error::{QueryError, QueryResult};
use crate::store::DatasetStore;

pub struct QueryEngine<'a, S: DatasetStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DatasetStore + ?Sized> QueryEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: DatasetStore + ?Sized> Clone for QueryEngine<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: DatasetStore + ?Sized> Copy for QueryEngine<'_, S> {}

/// Validate a top-K request size. Zero is allowed and yields nothing.
fn validate_count(name: &'static str, value: i64) -> QueryResult<usize> {
    usize::try_from(value).map_err(|_| {
        tracing::warn!("Rejected {} = {}", name, value);
        QueryError::InvalidParameter { name, value }
    })
}
