mod model;
pub use self::model::LuisModel;

mod result;
pub use self::result::LuisResult;

mod intent;
pub use self::intent::{Action, ActionParameter, IntentRecommendation};

mod entity;
pub use self::entity::EntityRecommendation;

use serde::{Deserialize, Deserializer};

/// The service sends `null` or leaves out list fields it has nothing for.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
