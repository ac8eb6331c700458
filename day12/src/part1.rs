use std::collections::{HashSet, VecDeque};

use miette::{miette, Diagnostic, Result, SourceSpan};
use nom::{
    character::complete::{newline, satisfy},
    multi::{many1, separated_list1},
    IResult,
};
use nom_locate::{position, LocatedSpan};
use thiserror::Error;
use tracing::debug;

type Span<'a> = LocatedSpan<&'a str>;
type Position = (usize, usize);

/// Up, down, left, right. Fixed order so traversal is deterministic.
const DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

#[derive(Debug, Error, Diagnostic)]
#[error("garden rows have unequal lengths")]
#[diagnostic(
    code(day12::ragged_rows),
    help("every row of the garden map must be the same width")
)]
struct RaggedRowsError {
    #[source_code]
    src: String,
    #[label("this row has a different width")]
    span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row<'a> {
    start: Span<'a>,
    plots: Vec<char>,
}

fn parse_row(input: Span) -> IResult<Span, Row> {
    let (input, start) = position(input)?;
    let (input, plots) = many1(satisfy(|c: char| c.is_ascii_alphanumeric()))(input)?;
    Ok((input, Row { start, plots }))
}

fn parse_rows(input: Span) -> IResult<Span, Vec<Row>> {
    separated_list1(newline, parse_row)(input)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    width: usize,
    height: usize,
    plots: Vec<Vec<char>>,
}

impl Garden {
    pub fn parse(input: &str) -> Result<Self> {
        let (rest, rows) = parse_rows(Span::new(input))
            .map_err(|e| miette!("failed to parse garden map: {e}"))?;
        if !rest.fragment().trim().is_empty() {
            return Err(miette!("unexpected content after garden map"));
        }

        let width = rows[0].plots.len();
        if let Some(row) = rows.iter().find(|row| row.plots.len() != width) {
            return Err(RaggedRowsError {
                src: input.to_string(),
                span: (row.start.location_offset(), row.plots.len()).into(),
            }
            .into());
        }

        Ok(Self {
            width,
            height: rows.len(),
            plots: rows.into_iter().map(|row| row.plots).collect(),
        })
    }

    /// In-bounds 4-neighbors in canonical up, down, left, right order.
    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < self.width && ny < self.height).then_some((nx, ny))
        })
    }

    /// Partitions the garden into maximal 4-connected same-plant regions.
    ///
    /// Seeds are taken in row-major order; cells are marked as seen when
    /// enqueued so no cell ever enters a queue twice.
    pub fn regions(&self) -> Vec<Region> {
        let mut seen: HashSet<Position> = HashSet::new();
        let mut regions = Vec::new();

        for y in 0..self.height {
            for x in 0..self.width {
                if !seen.insert((x, y)) {
                    continue;
                }

                let plant = self.plots[y][x];
                let mut cells = HashSet::from([(x, y)]);
                let mut queue = VecDeque::from([(x, y)]);

                while let Some((cx, cy)) = queue.pop_front() {
                    for (nx, ny) in self.neighbors(cx, cy) {
                        if self.plots[ny][nx] == plant && seen.insert((nx, ny)) {
                            cells.insert((nx, ny));
                            queue.push_back((nx, ny));
                        }
                    }
                }

                regions.push(Region { cells });
            }
        }

        regions
    }
}

/// A maximal set of 4-connected cells sharing one plant type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: HashSet<Position>,
}

impl Region {
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Count of cell edges not shared with another cell of the region.
    pub fn perimeter(&self) -> usize {
        self.cells
            .iter()
            .map(|&(x, y)| {
                DIRECTIONS
                    .iter()
                    .filter(|&&(dx, dy)| self.exposed(x, y, dx, dy))
                    .count()
            })
            .sum()
    }

    fn exposed(&self, x: usize, y: usize, dx: isize, dy: isize) -> bool {
        match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
            (Some(nx), Some(ny)) => !self.cells.contains(&(nx, ny)),
            _ => true,
        }
    }

    pub fn price(&self) -> usize {
        self.area() * self.perimeter()
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let garden = Garden::parse(input)?;
    let regions = garden.regions();
    debug!("found {} regions", regions.len());

    let total: usize = regions.iter().map(Region::price).sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SMALL: &str = "AAAA
BBCD
BBCC
EEEC";

    const NESTED: &str = "OOOOO
OXOXO
OOOOO
OXOXO
OOOOO";

    const LARGE: &str = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";

    #[rstest]
    #[case(SMALL, "140")]
    #[case(NESTED, "772")]
    #[case(LARGE, "1930")]
    fn test_process(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn test_small_partition() -> Result<()> {
        let garden = Garden::parse(SMALL)?;
        let regions = garden.regions();

        assert_eq!(5, regions.len());

        let mut areas: Vec<usize> = regions.iter().map(Region::area).collect();
        areas.sort_unstable();
        assert_eq!(vec![1, 3, 4, 4, 4], areas);

        // partition property: every cell in exactly one region
        let mut all_cells: Vec<Position> = regions
            .iter()
            .flat_map(|region| region.cells.iter().copied())
            .collect();
        all_cells.sort_unstable();
        all_cells.dedup();
        assert_eq!(16, all_cells.len());
        Ok(())
    }

    #[test]
    fn test_single_cell_perimeter() -> Result<()> {
        let garden = Garden::parse("A")?;
        let regions = garden.regions();
        assert_eq!(1, regions.len());
        assert_eq!(1, regions[0].area());
        assert_eq!(4, regions[0].perimeter());
        Ok(())
    }

    #[test]
    fn test_rectangle_perimeter() -> Result<()> {
        let garden = Garden::parse("AAA\nAAA")?;
        let regions = garden.regions();
        assert_eq!(1, regions.len());
        // 2 * (w + h)
        assert_eq!(10, regions[0].perimeter());
        Ok(())
    }

    #[test]
    fn test_deterministic() -> Result<()> {
        assert_eq!(process(LARGE)?, process(LARGE)?);
        Ok(())
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Garden::parse("AAA\nAA").is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Garden::parse("").is_err());
    }
}
