use miette::{IntoDiagnostic, Result};

/// A report is safe when the levels are strictly monotonic and every
/// adjacent step has magnitude 1..=3.
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
    let safe = reports.iter().filter(|report| is_safe(report)).count();

    Ok(safe.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> Result<()> {
        let input = "7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";
        assert_eq!("2", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case(&[7, 6, 4, 2, 1], true)]
    #[case(&[1, 2, 7, 8, 9], false)]
    #[case(&[1, 3, 2, 4, 5], false)]
    #[case(&[8, 6, 4, 4, 1], false)]
    #[case(&[1, 3, 6, 7, 9], true)]
    fn test_is_safe(#[case] levels: &[i64], #[case] expected: bool) {
        assert_eq!(expected, is_safe(levels));
    }
}
