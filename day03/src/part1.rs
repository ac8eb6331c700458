use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{anychar, char, digit1},
    combinator::{map_res, verify},
    multi::{many0, many_till},
    sequence::{delimited, separated_pair},
    IResult, Parser,
};

const MAX_NUMBER_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mul {
    x: u32,
    y: u32,
}

impl Mul {
    fn evaluate(&self) -> u32 {
        self.x * self.y
    }
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(
        verify(digit1, |d: &str| d.len() <= MAX_NUMBER_LENGTH),
        str::parse,
    )(input)
}

fn mul(input: &str) -> IResult<&str, Mul> {
    let (input, _) = tag("mul")(input)?;
    let (input, (x, y)) = delimited(
        char('('),
        separated_pair(number, char(','), number),
        char(')'),
    )(input)?;

    Ok((input, Mul { x, y }))
}

/// Scans past corrupted bytes, yielding every well-formed `mul(X,Y)`.
fn instructions(input: &str) -> IResult<&str, Vec<Mul>> {
    many0(many_till(anychar, mul).map(|(_, m)| m))(input)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let (_, muls) =
        instructions(input).map_err(|e| miette!("failed to scan instructions: {e}"))?;

    let total: u32 = muls.iter().map(Mul::evaluate).sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> Result<()> {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!("161", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("mul(2,4)", "8")]
    #[case("xmul(2,4)mul(3,3)", "17")]
    #[case("mul(1234,5)", "0")]
    #[case("mul (2,4)", "0")]
    fn test_process_cases(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn test_instruction_scan() -> Result<()> {
        let input = "xmul(2,4)%&mul[3,7]mul(11,8)";
        let (_, muls) = instructions(input).unwrap();
        assert_eq!(vec![Mul { x: 2, y: 4 }, Mul { x: 11, y: 8 }], muls);
        Ok(())
    }
}
