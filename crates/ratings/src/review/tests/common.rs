use crate::review::{Dish, Restaurant};

pub(super) fn cheesegaddon() -> Restaurant {
    Restaurant::new("Cheesegaddon", 5, 3, 2)
}

pub(super) fn restaurant(food_quality: i32, environment: i32, location: i32) -> Restaurant {
    Restaurant::new("Fixture Bistro", food_quality, environment, location)
}

pub(super) fn soup() -> Dish {
    Dish::new("Soup", 2, 4, 0, 0, 5)
}

pub(super) fn dish(tastes: [i32; 5]) -> Dish {
    let [sweetness, saltiness, bitterness, sourness, umami] = tastes;
    Dish::new("Fixture Plate", sweetness, saltiness, bitterness, sourness, umami)
}
