use std::collections::HashMap;

use miette::{Diagnostic, Result};
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PuzzleError {
    #[error("failed to parse initial secret")]
    #[diagnostic(code(day22::parse_error))]
    Parse(#[from] std::num::ParseIntError),

    #[error("no change pattern found")]
    #[diagnostic(code(day22::no_pattern))]
    NoPattern,
}

type Pattern = [i64; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Secret(u64);

impl Secret {
    const MODULUS: u64 = 16_777_216; // 2^24

    #[inline]
    fn mix(&mut self, value: u64) {
        self.0 ^= value;
    }

    #[inline]
    fn prune(&mut self) {
        self.0 %= Self::MODULUS;
    }

    fn evolve(&mut self) {
        let product = self.0 << 6;
        self.mix(product);
        self.prune();

        let quotient = self.0 >> 5;
        self.mix(quotient);
        self.prune();

        let product = self.0 << 11;
        self.mix(product);
        self.prune();
    }

    /// A buyer's offer is the last digit of the secret.
    #[inline]
    fn price(&self) -> i64 {
        (self.0 % 10) as i64
    }
}

/// First sale price for every 4-change pattern a buyer sees. The initial
/// secret's price starts the sequence, so the first pattern covers the
/// first four changes.
fn first_prices(initial: u64, iterations: usize) -> HashMap<Pattern, i64> {
    let mut secret = Secret(initial);
    let mut prices = Vec::with_capacity(iterations + 1);
    prices.push(secret.price());

    for _ in 0..iterations {
        secret.evolve();
        prices.push(secret.price());
    }

    let deltas: Vec<i64> = prices.windows(2).map(|w| w[1] - w[0]).collect();

    let mut first = HashMap::new();
    for (idx, window) in deltas.windows(4).enumerate() {
        let pattern: Pattern = [window[0], window[1], window[2], window[3]];
        first.entry(pattern).or_insert(prices[idx + 4]);
    }

    first
}

#[tracing::instrument(skip_all)]
pub fn process(input: &str) -> Result<String, PuzzleError> {
    let buyers = input
        .lines()
        .map(|line| line.parse().map_err(PuzzleError::Parse))
        .collect::<Result<Vec<u64>, _>>()?;

    let buyer_prices: Vec<HashMap<Pattern, i64>> = buyers
        .par_iter()
        .map(|&initial| first_prices(initial, 2000))
        .collect();

    let mut totals: HashMap<Pattern, i64> = HashMap::new();
    for prices in &buyer_prices {
        for (pattern, price) in prices {
            *totals.entry(*pattern).or_default() += price;
        }
    }

    let best = totals.values().max().ok_or(PuzzleError::NoPattern)?;

    Ok(best.to_string())
}
