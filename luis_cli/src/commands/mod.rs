pub mod query;
pub mod url;
