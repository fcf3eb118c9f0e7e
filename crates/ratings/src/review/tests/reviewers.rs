use super::common::*;
use crate::review::{DishReviewer, Restaurant, RestaurantReviewer, Reviewer};

#[test]
fn restaurant_reviewer_weights_food_quality_heaviest() {
    assert_eq!(RestaurantReviewer.rate(&cheesegaddon()).value(), 4);
    assert_eq!(RestaurantReviewer.rate(&restaurant(1, 0, 0)).value(), 1);
    assert_eq!(RestaurantReviewer.rate(&restaurant(0, 0, 4)).value(), 0);
    assert_eq!(RestaurantReviewer.rate(&restaurant(0, 5, 0)).value(), 2);
}

#[test]
fn restaurant_reviewer_handles_floor_and_ceiling_of_scale() {
    assert_eq!(RestaurantReviewer.rate(&restaurant(0, 0, 0)).value(), 0);
    assert_eq!(RestaurantReviewer.rate(&restaurant(5, 5, 5)).value(), 5);
}

#[test]
fn restaurant_name_does_not_influence_rating() {
    let plain = restaurant(4, 2, 1);
    let renamed = Restaurant {
        name: "Completely different".to_string(),
        ..plain.clone()
    };

    assert_eq!(RestaurantReviewer.rate(&plain), RestaurantReviewer.rate(&renamed));
}

#[test]
fn dish_reviewer_rounds_half_up() {
    // 0.2 + 0.8 + 2.5 = 3.5
    assert_eq!(DishReviewer.rate(&soup()).value(), 4);
}

#[test]
fn dish_reviewer_weights_umami_heaviest() {
    assert_eq!(DishReviewer.rate(&dish([0, 0, 0, 0, 5])).value(), 3);
    assert_eq!(DishReviewer.rate(&dish([5, 0, 5, 5, 0])).value(), 2);
    assert_eq!(DishReviewer.rate(&dish([0, 5, 0, 0, 0])).value(), 1);
    assert_eq!(DishReviewer.rate(&dish([5, 5, 5, 5, 5])).value(), 5);
}

#[test]
fn reviewers_are_idempotent() {
    let restaurant = cheesegaddon();
    let dish = soup();

    assert_eq!(
        RestaurantReviewer.rate(&restaurant),
        RestaurantReviewer.rate(&restaurant)
    );
    assert_eq!(DishReviewer.rate(&dish), DishReviewer.rate(&dish));
}
