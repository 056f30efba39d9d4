pub mod query;
pub mod results;
