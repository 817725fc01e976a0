//! Request-scoped data extracted by the agents. Nothing here is persisted;
//! every value is built from one LLM response and dropped with the response.

pub mod alternative;
pub mod calorie;
pub mod query;

pub use alternative::{AlternativesReply, IngredientAlternative};
pub use calorie::CalorieEstimate;
pub use query::SearchQuery;
