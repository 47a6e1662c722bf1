//! Item Category
//!
//! Closed set of categories an item can belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::ValidationError;

/// Category determines the icon drawn for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Sleeping,
    Clothing,
    Food,
    Equipment,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Sleeping,
        Category::Clothing,
        Category::Food,
        Category::Equipment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sleeping => "Sleeping",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Equipment => "Equipment",
            Category::Other => "Other",
        }
    }

    /// Font Awesome icon class
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Sleeping => "fa-bed",
            Category::Clothing => "fa-shirt",
            Category::Food => "fa-utensils",
            Category::Equipment => "fa-toolbox",
            Category::Other => "fa-ellipsis",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}
