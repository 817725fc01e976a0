use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Sentinel pair returned by the calorie agent when the ingredient list does
/// not carry enough information for an estimate.
pub const CANNOT_ESTIMATE_CALORY: &str = "نامشخص";
pub const CANNOT_ESTIMATE_EXPLANATION: &str = "اطلاعات کافی برای تخمین کالری وجود ندارد";

/// Calorie estimate for a prepared dish, per 100 grams, in Persian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CalorieEstimate {
    #[validate(length(min = 1))]
    pub estimated_calory: String,
    #[validate(custom(function = "at_most_100_words"))]
    pub explanation: String,
}

fn at_most_100_words(explanation: &str) -> Result<(), ValidationError> {
    if explanation.split_whitespace().count() > 100 {
        return Err(ValidationError::new("explanation_too_long"));
    }
    Ok(())
}
