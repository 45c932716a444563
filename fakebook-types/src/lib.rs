pub mod models;
pub mod results;

pub use models::*;
pub use results::*;
