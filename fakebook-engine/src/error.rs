use fakebook_types::UserId;
use thiserror::Error;

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The dataset store could not supply a collection
    #[error("data access failed: {0}")]
    DataAccess(String),

    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: i64 },

    #[error("user {0} does not exist")]
    UserNotFound(UserId),

    #[error("user {0} has no friends")]
    NoFriends(UserId),
}

impl QueryError {
    /// True when the query could not run, as opposed to rejecting its input
    pub fn is_data_access(&self) -> bool {
        matches!(self, QueryError::DataAccess(_))
    }
}

impl From<anyhow::Error> for QueryError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Dataset store fault: {:#}", err);
        QueryError::DataAccess(format!("{:#}", err))
    }
}
