use std::collections::HashSet;

use miette::{miette, Result};
use rayon::prelude::*;
use tracing::debug;

const OBSTACLE: char = '#';
const START: char = '^';
const EMPTY: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    fn step(self, from: Position) -> Position {
        let Position { x, y } = from;
        match self {
            Self::North => Position { x, y: y - 1 },
            Self::East => Position { x: x + 1, y },
            Self::South => Position { x, y: y + 1 },
            Self::West => Position { x: x - 1, y },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Position {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone)]
struct Map {
    rows: i32,
    cols: i32,
    obstacles: HashSet<Position>,
    open: Vec<Position>,
    start: Position,
}

impl Map {
    fn parse(input: &str) -> Result<Self> {
        let rows = input.lines().count() as i32;
        let cols = input.lines().next().map_or(0, str::len) as i32;

        let mut obstacles = HashSet::new();
        let mut open = Vec::new();
        let mut start = None;

        for (y, line) in input.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let position = Position {
                    x: x as i32,
                    y: y as i32,
                };
                match c {
                    OBSTACLE => {
                        obstacles.insert(position);
                    }
                    START => start = Some(position),
                    EMPTY => open.push(position),
                    _ => {}
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            obstacles,
            open,
            start: start.ok_or_else(|| miette!("no guard start position in input"))?,
        })
    }

    fn contains(&self, position: Position) -> bool {
        (0..self.cols).contains(&position.x) && (0..self.rows).contains(&position.y)
    }
}

/// Runs the patrol with one extra obstruction and reports whether it ever
/// revisits a (position, direction) state.
fn patrol_loops(map: &Map, obstruction: Position) -> bool {
    let mut seen = HashSet::new();
    let mut position = map.start;
    let mut direction = Direction::North;

    loop {
        if !seen.insert((position, direction)) {
            return true;
        }

        let next = direction.step(position);
        if !map.contains(next) {
            return false;
        }
        if next == obstruction || map.obstacles.contains(&next) {
            direction = direction.turn_right();
        } else {
            position = next;
        }
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let map = Map::parse(input)?;
    debug!(
        "testing {} candidate obstruction positions",
        map.open.len()
    );

    let loops = map
        .open
        .par_iter()
        .filter(|&&candidate| patrol_loops(&map, candidate))
        .count();

    Ok(loops.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

    #[test]
    fn test_process() -> Result<()> {
        assert_eq!("6", process(SAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_known_loop_position() -> Result<()> {
        let map = Map::parse(SAMPLE)?;
        // the published sample lists (3, 6) as a looping obstruction
        assert!(patrol_loops(&map, Position { x: 3, y: 6 }));
        assert!(!patrol_loops(&map, Position { x: 0, y: 0 }));
        Ok(())
    }

    #[test]
    fn test_open_cells_exclude_start() -> Result<()> {
        let map = Map::parse(SAMPLE)?;
        assert!(!map.open.contains(&map.start));
        Ok(())
    }
}
