use miette::{Diagnostic, Result, SourceSpan};
use nom::{
    bytes::complete::tag,
    character::complete::{digit1, space1},
    combinator::map_res,
    multi::separated_list1,
    IResult,
};
use rayon::prelude::*;
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

/// Undoes a concatenation: if `target` ends in the digits of `suffix` with
/// something left over, returns the leading digits.
fn strip_suffix(target: u64, suffix: u64) -> Option<u64> {
    let mut magnitude = 10;
    while magnitude <= suffix {
        magnitude *= 10;
    }

    (target > suffix && (target - suffix) % magnitude == 0)
        .then(|| (target - suffix) / magnitude)
}

fn solvable(target: u64, operands: &[u64]) -> bool {
    match operands {
        [] => false,
        [value] => *value == target,
        [rest @ .., last] => {
            (*last != 0 && target % *last == 0 && solvable(target / *last, rest))
                || (target >= *last && solvable(target - *last, rest))
                || strip_suffix(target, *last).is_some_and(|prefix| solvable(prefix, rest))
        }
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let equations = parse_input(input)?;

    let total: u64 = equations
        .par_iter()
        .filter(|(target, operands)| solvable(*target, operands))
        .map(|(target, _)| target)
        .sum();

    Ok(total.to_string())
}
