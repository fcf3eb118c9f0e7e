use crate::output::write_report;
use ratings::config::OutputFormat;
use ratings::error::AppError;
use ratings::review::{Evaluator, RatingReport, Restaurant, RestaurantReviewer};
use std::io::Write;

pub(crate) fn seeded_restaurant() -> Restaurant {
    Restaurant::new("Cheesegaddon", 5, 3, 2)
}

pub(crate) fn run_demo<W: Write>(out: &mut W, format: OutputFormat) -> Result<(), AppError> {
    let restaurant = seeded_restaurant();
    let reviewer = RestaurantReviewer;
    let evaluator: Evaluator<Restaurant> = Evaluator::new();

    let rating = evaluator.rate(&restaurant, &reviewer);

    write_report(out, &RatingReport::new(&restaurant, rating), format)
}
