use super::Rating;

/// Weights are kept in tenths so every weighted sum is exact.
pub(crate) const TENTHS_PER_UNIT: i64 = 10;

/// Food quality, environment, location.
pub(crate) const RESTAURANT_WEIGHTS: [i64; 3] = [6, 3, 1];

/// Sweetness, saltiness, bitterness, sourness, umami.
pub(crate) const DISH_WEIGHTS: [i64; 5] = [1, 2, 1, 1, 5];

const fn total(weights: &[i64]) -> i64 {
    let mut sum = 0;
    let mut index = 0;
    while index < weights.len() {
        sum += weights[index];
        index += 1;
    }
    sum
}

const _: () = assert!(total(&RESTAURANT_WEIGHTS) == TENTHS_PER_UNIT);
const _: () = assert!(total(&DISH_WEIGHTS) == TENTHS_PER_UNIT);

/// Weighted sum rounded half up, i.e. `floor(sum + 0.5)`.
pub(crate) fn weighted_rating<const N: usize>(weights: &[i64; N], values: [i32; N]) -> Rating {
    let tenths: i64 = weights
        .iter()
        .zip(values)
        .map(|(weight, value)| weight * i64::from(value))
        .sum();
    let rounded = (tenths + TENTHS_PER_UNIT / 2).div_euclid(TENTHS_PER_UNIT);
    debug_assert!(i32::try_from(rounded).is_ok());

    Rating::new(rounded as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_values_round_up() {
        assert_eq!(weighted_rating(&[5, 5], [3, 4]).value(), 4);
        assert_eq!(weighted_rating(&[5, 5], [0, 1]).value(), 1);
    }

    #[test]
    fn negative_halves_round_toward_positive_infinity() {
        assert_eq!(weighted_rating(&[5, 5], [0, -1]).value(), 0);
        assert_eq!(weighted_rating(&[5, 5], [-1, -2]).value(), -1);
        assert_eq!(weighted_rating(&[6, 3, 1], [-1, 0, 0]).value(), -1);
    }

    #[test]
    fn extreme_inputs_stay_in_range() {
        let max = [i32::MAX; 3];
        let min = [i32::MIN; 3];
        assert_eq!(weighted_rating(&RESTAURANT_WEIGHTS, max).value(), i32::MAX);
        assert_eq!(weighted_rating(&RESTAURANT_WEIGHTS, min).value(), i32::MIN);
    }
}
