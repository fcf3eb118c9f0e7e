use super::domain::{Dish, Restaurant};
use super::weights::{weighted_rating, DISH_WEIGHTS, RESTAURANT_WEIGHTS};
use super::{Rating, Reviewer};

/// Rates restaurants as `0.6 * food_quality + 0.3 * environment + 0.1 * location`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestaurantReviewer;

impl Reviewer<Restaurant> for RestaurantReviewer {
    fn rate(&self, obj: &Restaurant) -> Rating {
        weighted_rating(
            &RESTAURANT_WEIGHTS,
            [obj.food_quality, obj.environment, obj.location],
        )
    }
}

/// Rates dishes with umami dominating and saltiness as the runner-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DishReviewer;

impl Reviewer<Dish> for DishReviewer {
    fn rate(&self, obj: &Dish) -> Rating {
        weighted_rating(
            &DISH_WEIGHTS,
            [
                obj.sweetness,
                obj.saltiness,
                obj.bitterness,
                obj.sourness,
                obj.umami,
            ],
        )
    }
}
