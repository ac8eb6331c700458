use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{digit1, newline},
    combinator::map_res,
    multi::{many1, separated_list1},
    IResult,
};

/// The prize coordinates were measured with a unit-conversion error.
const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    fn corrected(self) -> Self {
        Self {
            prize: (self.prize.0 + PRIZE_OFFSET, self.prize.1 + PRIZE_OFFSET),
            ..self
        }
    }

    fn presses(&self) -> Option<(i64, i64)> {
        let det = self.a.0 * self.b.1 - self.b.0 * self.a.1;
        if det == 0 {
            return None;
        }

        let a = self.prize.0 * self.b.1 - self.b.0 * self.prize.1;
        let b = self.a.0 * self.prize.1 - self.prize.0 * self.a.1;

        (a % det == 0 && b % det == 0).then(|| (a / det, b / det))
    }

    fn cost(&self) -> i64 {
        self.presses().map_or(0, |(a, b)| 3 * a + b)
    }
}

// region: nom parser
fn parse_i64(input: &str) -> IResult<&str, i64> {
    map_res(digit1, str::parse)(input)
}

fn parse_button(label: &'static str) -> impl Fn(&str) -> IResult<&str, (i64, i64)> {
    move |input: &str| {
        let (input, _) = tag(label)(input)?;
        let (input, _) = tag(": X+")(input)?;
        let (input, dx) = parse_i64(input)?;
        let (input, _) = tag(", Y+")(input)?;
        let (input, dy) = parse_i64(input)?;

        Ok((input, (dx, dy)))
    }
}

fn parse_prize(input: &str) -> IResult<&str, (i64, i64)> {
    let (input, _) = tag("Prize: X=")(input)?;
    let (input, x) = parse_i64(input)?;
    let (input, _) = tag(", Y=")(input)?;
    let (input, y) = parse_i64(input)?;

    Ok((input, (x, y)))
}

fn parse_machine(input: &str) -> IResult<&str, Machine> {
    let (input, a) = parse_button("Button A")(input)?;
    let (input, _) = newline(input)?;
    let (input, b) = parse_button("Button B")(input)?;
    let (input, _) = newline(input)?;
    let (input, prize) = parse_prize(input)?;

    Ok((input, Machine { a, b, prize }))
}

fn parse_machines(input: &str) -> IResult<&str, Vec<Machine>> {
    separated_list1(many1(newline), parse_machine)(input)
}
// endregion

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let (_, machines) =
        parse_machines(input).map_err(|e| miette!("failed to parse machines: {e}"))?;

    let total: i64 = machines
        .iter()
        .map(|machine| machine.corrected().cost())
        .sum();

    Ok(total.to_string())
}
