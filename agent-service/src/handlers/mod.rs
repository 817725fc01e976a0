pub mod calculate_calory;
pub mod health;
pub mod replace_ingredient;
pub mod smart_search;

pub use calculate_calory::calculate_calory;
pub use health::health_check;
pub use replace_ingredient::replace_ingredient;
pub use smart_search::smart_search;

use serde::Deserialize;
use validator::Validate;

/// Request body shared by all three agent endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct AgentRequest {
    #[validate(length(min = 1, message = "Text cannot be empty"))]
    pub text: String,
}
