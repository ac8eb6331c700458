use std::collections::HashMap;

use itertools::Itertools;
use miette::{miette, IntoDiagnostic, Result};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let mut left = Vec::new();
    let mut counts: HashMap<i64, i64> = HashMap::new();

    for line in input.lines() {
        let (a, b) = line
            .split_whitespace()
            .map(|n| n.parse::<i64>().into_diagnostic())
            .collect_tuple()
            .ok_or_else(|| miette!("expected two columns per line, got {line:?}"))?;
        left.push(a?);
        *counts.entry(b?).or_default() += 1;
    }

    let similarity: i64 = left
        .iter()
        .map(|x| x * counts.get(x).copied().unwrap_or(0))
        .sum();

    Ok(similarity.to_string())
}
