//! Course generation request types

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Difficulty level for a generated course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A course generation request as parsed from the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    /// Subject the course should cover
    pub topic: String,
    /// Target difficulty
    pub level: CourseLevel,
    /// Number of modules to generate
    #[serde(default = "default_num_modules", rename = "numModules")]
    pub num_modules: u8,
}

fn default_num_modules() -> u8 {
    5
}

impl CourseRequest {
    /// Validate field ranges before the request reaches the core
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(GatewayError::Validation(
                "topic must not be empty".to_string(),
            ));
        }
        if !(1..=20).contains(&self.num_modules) {
            return Err(GatewayError::Validation(
                "numModules must be between 1 and 20".to_string(),
            ));
        }
        Ok(())
    }
}
