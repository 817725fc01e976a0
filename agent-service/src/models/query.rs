use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Structured search query extracted from a free-form Persian food query.
/// Forwarded verbatim as the body of the downstream search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default)]
    #[validate(custom(function = "non_empty_ingredients"))]
    pub include_ingredients: Vec<String>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: u32,
}

fn default_limit() -> u32 {
    1
}

fn non_empty_ingredients(ingredients: &Vec<String>) -> Result<(), ValidationError> {
    if ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(ValidationError::new("empty_ingredient"));
    }
    Ok(())
}
