use serde::{Deserialize, Serialize};

/// Entity shapes that can appear in a rating report.
///
/// Scoring never goes through this trait; it only supplies the label and
/// identifier printed next to a rating.
pub trait ScoredEntity {
    const KIND: &'static str;

    fn name(&self) -> &str;
}

/// Restaurant snapshot rated on food, environment and location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub food_quality: i32,
    pub environment: i32,
    pub location: i32,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        food_quality: i32,
        environment: i32,
        location: i32,
    ) -> Self {
        Self {
            name: name.into(),
            food_quality,
            environment,
            location,
        }
    }
}

impl ScoredEntity for Restaurant {
    const KIND: &'static str = "Restaurant";

    fn name(&self) -> &str {
        &self.name
    }
}

/// Dish described by its five taste dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub sweetness: i32,
    pub saltiness: i32,
    pub bitterness: i32,
    pub sourness: i32,
    pub umami: i32,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        sweetness: i32,
        saltiness: i32,
        bitterness: i32,
        sourness: i32,
        umami: i32,
    ) -> Self {
        Self {
            name: name.into(),
            sweetness,
            saltiness,
            bitterness,
            sourness,
            umami,
        }
    }
}

impl ScoredEntity for Dish {
    const KIND: &'static str = "Dish";

    fn name(&self) -> &str {
        &self.name
    }
}
