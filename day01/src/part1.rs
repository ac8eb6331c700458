use itertools::Itertools;
use miette::{miette, IntoDiagnostic, Result};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for line in input.lines() {
        let (a, b) = line
            .split_whitespace()
            .map(|n| n.parse::<i64>().into_diagnostic())
            .collect_tuple()
            .ok_or_else(|| miette!("expected two columns per line, got {line:?}"))?;
        left.push(a?);
        right.push(b?);
    }

    left.sort_unstable();
    right.sort_unstable();

    let distance: i64 = left.iter().zip(&right).map(|(a, b)| (a - b).abs()).sum();

    Ok(distance.to_string())
}
