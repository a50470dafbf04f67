mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, LuisService};
pub use self::errors::Error;
pub use self::query::{LuisQuery, Query, LUIS_BASE_URL};
