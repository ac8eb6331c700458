use miette::{Diagnostic, Result, SourceSpan};
use nom::{
    bytes::complete::tag,
    character::complete::{digit1, space1},
    combinator::map_res,
    multi::separated_list1,
    IResult,
};
use thiserror::Error;

type Equation = (u64, Vec<u64>);

#[derive(Debug, Error, Diagnostic)]
#[error("failed to parse equation line")]
#[diagnostic(code(day07::parse_error), help("lines look like `190: 10 19`"))]
struct ParseLineError {
    #[source_code]
    src: String,
    #[label("could not parse this line")]
    span: SourceSpan,
}

fn parse_u64(input: &str) -> IResult<&str, u64> {
    map_res(digit1, str::parse)(input)
}

fn parse_line(input: &str) -> IResult<&str, Equation> {
    let (input, target) = parse_u64(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, _) = space1(input)?;
    let (input, operands) = separated_list1(space1, parse_u64)(input)?;

    Ok((input, (target, operands)))
}

fn parse_input(input: &str) -> Result<Vec<Equation>> {
    input
        .lines()
        .map(|line| {
            parse_line(line).map(|(_, equation)| equation).map_err(|_| {
                ParseLineError {
                    src: line.to_string(),
                    span: (0, line.len()).into(),
                }
                .into()
            })
        })
        .collect()
}

/// Works backwards from the target: the last operand was either multiplied
/// in (target must be divisible) or added (target must be large enough).
fn solvable(target: u64, operands: &[u64]) -> bool {
    match operands {
        [] => false,
        [value] => *value == target,
        [rest @ .., last] => {
            (*last != 0 && target % *last == 0 && solvable(target / *last, rest))
                || (target >= *last && solvable(target - *last, rest))
        }
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let equations = parse_input(input)?;

    let total: u64 = equations
        .iter()
        .filter(|(target, operands)| solvable(*target, operands))
        .map(|(target, _)| target)
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> Result<()> {
        let input = "190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20";
        assert_eq!("3749", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case(190, &[10, 19], true)]
    #[case(3267, &[81, 40, 27], true)]
    #[case(292, &[11, 6, 16, 20], true)]
    #[case(83, &[17, 5], false)]
    #[case(161011, &[16, 10, 13], false)]
    fn test_solvable(#[case] target: u64, #[case] operands: &[u64], #[case] expected: bool) {
        assert_eq!(expected, solvable(target, operands));
    }

    #[test]
    fn test_parse_line() {
        let (_, (target, operands)) = parse_line("3267: 81 40 27").unwrap();
        assert_eq!(3267, target);
        assert_eq!(vec![81, 40, 27], operands);
    }

    #[test]
    fn test_bad_line_is_fatal() {
        assert!(process("190 10 19").is_err());
    }
}
