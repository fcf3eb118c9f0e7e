//! Ratings computed by stateless reviewers and dispatched through a generic
//! [`review::Evaluator`].
//!
//! ```
//! use ratings::review::{Evaluator, Restaurant, RestaurantReviewer};
//!
//! let restaurant = Restaurant::new("Cheesegaddon", 5, 3, 2);
//! let rating = Evaluator::new().rate(&restaurant, &RestaurantReviewer);
//! assert_eq!(rating.value(), 4);
//! ```

pub mod config;
pub mod error;
pub mod review;
pub mod telemetry;
