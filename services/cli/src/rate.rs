use crate::output::write_report;
use clap::{Args, Subcommand};
use ratings::config::OutputFormat;
use ratings::error::AppError;
use ratings::review::import::{dishes_from_path, restaurants_from_path};
use ratings::review::{
    Dish, DishReviewer, Evaluator, RatingReport, Restaurant, RestaurantReviewer, Reviewer,
    ScoredEntity,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Subcommand, Debug)]
pub(crate) enum RateCommand {
    /// Rate a restaurant on food quality, environment and location
    Restaurant(RestaurantArgs),
    /// Rate a dish on its five taste dimensions
    Dish(DishArgs),
}

#[derive(Args, Debug)]
pub(crate) struct RestaurantArgs {
    /// Restaurant name (not used in scoring)
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) food_quality: i32,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) environment: i32,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) location: i32,
}

impl From<RestaurantArgs> for Restaurant {
    fn from(args: RestaurantArgs) -> Self {
        Restaurant::new(args.name, args.food_quality, args.environment, args.location)
    }
}

#[derive(Args, Debug)]
pub(crate) struct DishArgs {
    /// Dish name (not used in scoring)
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) sweetness: i32,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) saltiness: i32,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) bitterness: i32,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) sourness: i32,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) umami: i32,
}

impl From<DishArgs> for Dish {
    fn from(args: DishArgs) -> Self {
        Dish::new(
            args.name,
            args.sweetness,
            args.saltiness,
            args.bitterness,
            args.sourness,
            args.umami,
        )
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum BatchCommand {
    /// CSV with columns name,food_quality,environment,location
    Restaurants { path: PathBuf },
    /// CSV with columns name,sweetness,saltiness,bitterness,sourness,umami
    Dishes { path: PathBuf },
}

pub(crate) fn run_rate<W: Write>(
    out: &mut W,
    command: RateCommand,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        RateCommand::Restaurant(args) => {
            rate_entities(out, &[Restaurant::from(args)], &RestaurantReviewer, format)
        }
        RateCommand::Dish(args) => rate_entities(out, &[Dish::from(args)], &DishReviewer, format),
    }
}

pub(crate) fn run_batch<W: Write>(
    out: &mut W,
    command: BatchCommand,
    format: OutputFormat,
) -> Result<(), AppError> {
    match command {
        BatchCommand::Restaurants { path } => {
            let restaurants = restaurants_from_path(&path)?;
            info!(path = %path.display(), count = restaurants.len(), "rating restaurants");
            rate_entities(out, &restaurants, &RestaurantReviewer, format)
        }
        BatchCommand::Dishes { path } => {
            let dishes = dishes_from_path(&path)?;
            info!(path = %path.display(), count = dishes.len(), "rating dishes");
            rate_entities(out, &dishes, &DishReviewer, format)
        }
    }
}

fn rate_entities<W, E, R>(
    out: &mut W,
    entities: &[E],
    reviewer: &R,
    format: OutputFormat,
) -> Result<(), AppError>
where
    W: Write,
    E: ScoredEntity,
    R: Reviewer<E>,
{
    let evaluator = Evaluator::new();

    for entity in entities {
        let rating = evaluator.rate(entity, reviewer);
        write_report(out, &RatingReport::new(entity, rating), format)?;
    }

    Ok(())
}
