use std::collections::HashSet;

use itertools::Itertools;
use miette::{miette, Result};
use nom::{
    character::complete::{char, digit1, newline},
    combinator::map_res,
    multi::{many1, separated_list1},
    sequence::separated_pair,
    IResult,
};

type Rule = (u32, u32);
type Update = Vec<u32>;

fn page(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse)(input)
}

fn rule(input: &str) -> IResult<&str, Rule> {
    separated_pair(page, char('|'), page)(input)
}

fn parse_input(input: &str) -> IResult<&str, (Vec<Rule>, Vec<Update>)> {
    let (input, rules) = separated_list1(newline, rule)(input)?;
    let (input, _) = many1(newline)(input)?;
    let (input, updates) =
        separated_list1(newline, separated_list1(char(','), page))(input)?;

    Ok((input, (rules, updates)))
}

/// An update is ordered when no pair of pages appears in the reverse of a
/// rule's required order.
fn in_order(update: &[u32], rules: &HashSet<Rule>) -> bool {
    update
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !rules.contains(&(*b, *a)))
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let (_, (rules, updates)) =
        parse_input(input).map_err(|e| miette!("failed to parse input: {e}"))?;
    let rules: HashSet<Rule> = rules.into_iter().collect();

    let total: u32 = updates
        .iter()
        .filter(|update| in_order(update, &rules))
        .map(|update| update[update.len() / 2])
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47";

    #[test]
    fn test_process() -> Result<()> {
        assert_eq!("143", process(SAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_parse_sections() -> Result<()> {
        let (_, (rules, updates)) = parse_input(SAMPLE).unwrap();
        assert_eq!(21, rules.len());
        assert_eq!(6, updates.len());
        assert_eq!(vec![75, 29, 13], updates[2]);
        Ok(())
    }

    #[test]
    fn test_in_order() {
        let rules: HashSet<Rule> = [(47, 53), (97, 75)].into_iter().collect();
        assert!(in_order(&[47, 53], &rules));
        assert!(!in_order(&[53, 47], &rules));
        assert!(in_order(&[1, 2, 3], &rules));
    }
}
