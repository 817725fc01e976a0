use serde::{Deserialize, Serialize};
use validator::Validate;

/// One substitute suggested for an ingredient. All fields are short Persian
/// phrases produced by the substitution agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IngredientAlternative {
    #[validate(length(min = 1))]
    pub name: String,
    pub general_description: String,
    pub taste: String,
    pub cost: String,
    pub availability: String,
}

/// Full reply of the substitution agent. An empty list means no reasonable
/// alternative exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AlternativesReply {
    #[validate(length(max = 6))]
    #[validate(nested)]
    pub alternatives: Vec<IngredientAlternative>,
}
