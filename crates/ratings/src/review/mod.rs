//! Type-class style rating: a [`Reviewer`] is the capability, an entity shape
//! is the instance type, and [`Evaluator`] is the generic operation that works
//! for any pairing the compiler accepts.

mod domain;
pub mod import;
mod report;
mod reviewers;
mod weights;

#[cfg(test)]
mod tests;

pub use domain::{Dish, Restaurant, ScoredEntity};
pub use import::ImportError;
pub use report::RatingReport;
pub use reviewers::{DishReviewer, RestaurantReviewer};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Whole-number rating produced by a reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(i32);

impl Rating {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Rating> for i32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Capability to rate values of shape `T`.
pub trait Reviewer<T: ?Sized> {
    fn rate(&self, obj: &T) -> Rating;
}

impl<T, F> Reviewer<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Rating,
{
    fn rate(&self, obj: &T) -> Rating {
        self(obj)
    }
}

/// Generic dispatcher that hands an entity to whichever reviewer was supplied.
///
/// The evaluator carries no state and performs no transformation: the rating
/// it returns is exactly what the reviewer computed. Pairing a reviewer with
/// a shape it was not written for is rejected at compile time:
///
/// ```compile_fail
/// use ratings::review::{Dish, Evaluator, RestaurantReviewer};
///
/// let dish = Dish::new("Soup", 2, 4, 0, 0, 5);
/// let _ = Evaluator::new().rate(&dish, &RestaurantReviewer);
/// ```
pub struct Evaluator<T: ?Sized> {
    shape: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Evaluator<T> {
    pub const fn new() -> Self {
        Self { shape: PhantomData }
    }

    pub fn rate<R>(&self, obj: &T, reviewer: &R) -> Rating
    where
        R: Reviewer<T> + ?Sized,
    {
        let rating = reviewer.rate(obj);
        debug!(
            shape = std::any::type_name::<T>(),
            rating = rating.value(),
            "entity evaluated"
        );
        rating
    }
}

impl<T: ?Sized> Default for Evaluator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Evaluator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Evaluator<T> {}

impl<T: ?Sized> fmt::Debug for Evaluator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("shape", &std::any::type_name::<T>())
            .finish()
    }
}

/// Rates `obj` with `reviewer` without naming an [`Evaluator`].
pub fn evaluate<T, R>(obj: &T, reviewer: &R) -> Rating
where
    T: ?Sized,
    R: Reviewer<T> + ?Sized,
{
    Evaluator::new().rate(obj, reviewer)
}
