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

    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < self.width && ny < self.height).then_some((nx, ny))
        })
    }

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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: HashSet<Position>,
}

impl Region {
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    fn exposed(&self, x: usize, y: usize, dx: isize, dy: isize) -> bool {
        match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
            (Some(nx), Some(ny)) => !self.cells.contains(&(nx, ny)),
            _ => true,
        }
    }

    /// Number of straight fence runs around the region.
    ///
    /// Counted corner by corner over the four per-direction exposure sets:
    /// every convex corner is a cell exposed on two touching sides, and
    /// every concave corner wraps a diagonal neighbor exposed on the
    /// perpendicular side.
    pub fn sides(&self) -> usize {
        let mut up = HashSet::new();
        let mut down = HashSet::new();
        let mut left = HashSet::new();
        let mut right = HashSet::new();

        for &(x, y) in &self.cells {
            if self.exposed(x, y, 0, -1) {
                up.insert((x, y));
            }
            if self.exposed(x, y, 0, 1) {
                down.insert((x, y));
            }
            if self.exposed(x, y, -1, 0) {
                left.insert((x, y));
            }
            if self.exposed(x, y, 1, 0) {
                right.insert((x, y));
            }
        }

        let mut corners = 0;

        for &(x, y) in &up {
            if left.contains(&(x, y)) {
                corners += 1;
            }
            if right.contains(&(x, y)) {
                corners += 1;
            }
            if let (Some(px), Some(py)) = (x.checked_sub(1), y.checked_sub(1)) {
                if right.contains(&(px, py)) && !left.contains(&(x, y)) {
                    corners += 1;
                }
            }
            if let Some(py) = y.checked_sub(1) {
                if left.contains(&(x + 1, py)) && !right.contains(&(x, y)) {
                    corners += 1;
                }
            }
        }

        for &(x, y) in &down {
            if left.contains(&(x, y)) {
                corners += 1;
            }
            if right.contains(&(x, y)) {
                corners += 1;
            }
            if let Some(px) = x.checked_sub(1) {
                if right.contains(&(px, y + 1)) && !left.contains(&(x, y)) {
                    corners += 1;
                }
            }
            if left.contains(&(x + 1, y + 1)) && !right.contains(&(x, y)) {
                corners += 1;
            }
        }

        corners
    }

    pub fn price(&self) -> usize {
        self.area() * self.sides()
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

    const E_SHAPE: &str = "EEEEE
EXXXX
EEEEE
EXXXX
EEEEE";

    const DIAGONAL: &str = "AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA";

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
    #[case(SMALL, "80")]
    #[case(NESTED, "436")]
    #[case(E_SHAPE, "236")]
    #[case(DIAGONAL, "368")]
    #[case(LARGE, "1206")]
    fn test_process(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn test_single_cell_sides() -> Result<()> {
        let garden = Garden::parse("A")?;
        let regions = garden.regions();
        assert_eq!(4, regions[0].sides());
        Ok(())
    }

    #[test]
    fn test_rectangle_sides() -> Result<()> {
        let garden = Garden::parse("AAA\nAAA")?;
        let regions = garden.regions();
        assert_eq!(1, regions.len());
        assert_eq!(4, regions[0].sides());
        Ok(())
    }

    #[test]
    fn test_cross_sides() -> Result<()> {
        let garden = Garden::parse("BAB\nAAA\nBAB")?;
        let regions = garden.regions();

        let cross = regions
            .iter()
            .find(|region| region.area() == 5)
            .expect("cross region");
        assert_eq!(12, cross.sides());

        for corner in regions.iter().filter(|region| region.area() == 1) {
            assert_eq!(4, corner.sides());
        }
        Ok(())
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(Garden::parse("AA\nAAA").is_err());
    }
}
