use super::domain::ScoredEntity;
use super::{Evaluator, Rating, Reviewer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rating paired with the entity it describes, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingReport {
    pub kind: String,
    pub name: String,
    pub rating: Rating,
    pub evaluated_at: DateTime<Utc>,
}

impl RatingReport {
    pub fn new<E: ScoredEntity>(entity: &E, rating: Rating) -> Self {
        Self::at(entity, rating, Utc::now())
    }

    pub fn at<E: ScoredEntity>(entity: &E, rating: Rating, evaluated_at: DateTime<Utc>) -> Self {
        Self {
            kind: E::KIND.to_string(),
            name: entity.name().to_string(),
            rating,
            evaluated_at,
        }
    }

    /// Rates `entity` through an [`Evaluator`] and wraps the result.
    pub fn review<E, R>(entity: &E, reviewer: &R) -> Self
    where
        E: ScoredEntity,
        R: Reviewer<E> + ?Sized,
    {
        let rating = Evaluator::new().rate(entity, reviewer);
        Self::new(entity, rating)
    }

    /// `<Kind> <name> final rate is: <rating> stars`
    pub fn summary_line(&self) -> String {
        format!(
            "{} {} final rate is: {} stars",
            self.kind, self.name, self.rating
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
