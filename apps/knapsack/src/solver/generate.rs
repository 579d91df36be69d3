//! Random problem instances for `GET /generate`.

use rand::Rng;

use crate::models::GenerateResponse;

const VALUE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;
const VOLUME_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Draws `min_items..=max_items` items with whole-number values and volumes.
/// Capacity is half the total volume, but never less than the smallest
/// volume, so at least one item always fits.
pub fn random_instance<R: Rng + ?Sized>(
    rng: &mut R,
    min_items: usize,
    max_items: usize,
) -> GenerateResponse {
    let count = rng.random_range(min_items..=max_items);

    let values: Vec<f64> = (0..count)
        .map(|_| f64::from(rng.random_range(VALUE_RANGE)))
        .collect();
    let volumes: Vec<f64> = (0..count)
        .map(|_| f64::from(rng.random_range(VOLUME_RANGE)))
        .collect();

    let total: f64 = volumes.iter().sum();
    let smallest = volumes.iter().copied().fold(f64::INFINITY, f64::min);
    let capacity = (total / 2.0).floor().max(smallest);

    GenerateResponse {
        values,
        volumes,
        capacity,
    }
}
