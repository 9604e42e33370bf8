//! Musical styles

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A musical style; the name is its key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Style {
    #[validate(length(min = 1, max = 50, message = "Style Name must be 1 to 50 characters."))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Description cannot be longer than 200 characters."))]
    pub description: String,
}

impl Style {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
    }
}
