use std::cmp::Ordering;
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

fn in_order(update: &[u32], rules: &HashSet<Rule>) -> bool {
    update
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !rules.contains(&(*b, *a)))
}

/// Reorders the update so every rule holds, using the rule set as the
/// comparator.
fn reorder(update: &[u32], rules: &HashSet<Rule>) -> Update {
    let mut fixed = update.to_vec();
    fixed.sort_by(|a, b| {
        if rules.contains(&(*a, *b)) {
            Ordering::Less
        } else if rules.contains(&(*b, *a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    fixed
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let (_, (rules, updates)) =
        parse_input(input).map_err(|e| miette!("failed to parse input: {e}"))?;
    let rules: HashSet<Rule> = rules.into_iter().collect();

    let total: u32 = updates
        .iter()
        .filter(|update| !in_order(update, &rules))
        .map(|update| {
            let fixed = reorder(update, &rules);
            fixed[fixed.len() / 2]
        })
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
        assert_eq!("123", process(SAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_reorder() -> Result<()> {
        let (_, (rules, _)) = parse_input(SAMPLE).unwrap();
        let rules: HashSet<Rule> = rules.into_iter().collect();

        assert_eq!(vec![97, 75, 47, 61, 53], reorder(&[75, 97, 47, 61, 53], &rules));
        assert_eq!(vec![61, 29, 13], reorder(&[61, 13, 29], &rules));
        assert_eq!(vec![97, 75, 47, 29, 13], reorder(&[97, 13, 75, 29, 47], &rules));
        Ok(())
    }
}
