use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, char, digit1},
    combinator::{map_res, value, verify},
    multi::{many0, many_till},
    sequence::{delimited, separated_pair},
    IResult, Parser,
};

const MAX_NUMBER_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(
        verify(digit1, |d: &str| d.len() <= MAX_NUMBER_LENGTH),
        str::parse,
    )(input)
}

fn mul(input: &str) -> IResult<&str, Instruction> {
    let (input, _) = tag("mul")(input)?;
    let (input, (x, y)) = delimited(
        char('('),
        separated_pair(number, char(','), number),
        char(')'),
    )(input)?;

    Ok((input, Instruction::Mul(x, y)))
}

fn instruction(input: &str) -> IResult<&str, Instruction> {
    alt((
        value(Instruction::Do, tag("do()")),
        value(Instruction::Dont, tag("don't()")),
        mul,
    ))(input)
}

fn instructions(input: &str) -> IResult<&str, Vec<Instruction>> {
    many0(many_till(anychar, instruction).map(|(_, i)| i))(input)
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let (_, instructions) =
        instructions(input).map_err(|e| miette!("failed to scan instructions: {e}"))?;

    // mul instructions are enabled until the first don't()
    let (total, _) = instructions
        .iter()
        .fold((0u32, true), |(sum, enabled), inst| match inst {
            Instruction::Do => (sum, true),
            Instruction::Dont => (sum, false),
            Instruction::Mul(x, y) if enabled => (sum + x * y, enabled),
            Instruction::Mul(..) => (sum, enabled),
        });

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() -> Result<()> {
        let input =
            "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!("48", process(input)?);
        Ok(())
    }

    #[test]
    fn test_instruction_scan() -> Result<()> {
        let input = "do()x_don't()mul(2,3)";
        let (_, parsed) = instructions(input).unwrap();
        assert_eq!(
            vec![
                Instruction::Do,
                Instruction::Dont,
                Instruction::Mul(2, 3)
            ],
            parsed
        );
        Ok(())
    }

    #[test]
    fn test_disabled_until_do() -> Result<()> {
        assert_eq!("6", process("don't()mul(2,4)do()mul(2,3)")?);
        Ok(())
    }
}
