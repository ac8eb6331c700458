use std::collections::HashMap;

use miette::{IntoDiagnostic, Result};

const BLINKS: usize = 25;

type Cache = HashMap<(u64, usize), u64>;

/// Number of stones a single stone becomes after `blinks` blinks.
///
/// The stone list is never materialized; the recursion is memoized on
/// (value, blinks remaining).
fn count_stones(value: u64, blinks: usize, cache: &mut Cache) -> u64 {
    if blinks == 0 {
        return 1;
    }
    if let Some(&count) = cache.get(&(value, blinks)) {
        return count;
    }

    let count = if value == 0 {
        count_stones(1, blinks - 1, cache)
    } else {
        let digits = value.ilog10() + 1;
        if digits % 2 == 0 {
            let split = 10u64.pow(digits / 2);
            count_stones(value / split, blinks - 1, cache)
                + count_stones(value % split, blinks - 1, cache)
        } else {
            count_stones(value * 2024, blinks - 1, cache)
        }
    };

    cache.insert((value, blinks), count);
    count
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let stones = input
        .split_whitespace()
        .map(|n| n.parse::<u64>().into_diagnostic())
        .collect::<Result<Vec<u64>>>()?;

    let mut cache = Cache::new();
    let total: u64 = stones
        .iter()
        .map(|&stone| count_stones(stone, BLINKS, &mut cache))
        .sum();

    Ok(total.to_string())
}
