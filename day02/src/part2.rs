use miette::{IntoDiagnostic, Result};

fn is_safe(levels: &[i64]) -> bool {
    if levels.len() < 2 {
        return false;
    }

    let gradual = levels
        .windows(2)
        .all(|w| (1..=3).contains(&(w[1] - w[0]).abs()));
    let increasing = levels.windows(2).all(|w| w[0] < w[1]);
    let decreasing = levels.windows(2).all(|w| w[0] > w[1]);

    gradual && (increasing || decreasing)
}

/// Safe as-is, or safe after removing exactly one level.
fn is_safe_dampened(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }

    (0..levels.len()).any(|skip| {
        let mut shortened = levels.to_vec();
        shortened.remove(skip);
        is_safe(&shortened)
    })
}

fn parse_reports(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|n| n.parse::<i64>().into_diagnostic())
                .collect()
        })
        .collect()
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let reports = parse_reports(input)?;
    let safe = reports
        .iter()
        .filter(|report| is_safe_dampened(report))
        .count();

    Ok(safe.to_string())
}
