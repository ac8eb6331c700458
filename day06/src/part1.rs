use std::collections::HashSet;

use miette::{miette, Result};

const OBSTACLE: char = '#';
const START: char = '^';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    North, // ^
    East,  // >
    South, // v
    West,  // <
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
    start: Position,
}

impl Map {
    fn parse(input: &str) -> Result<Self> {
        let rows = input.lines().count() as i32;
        let cols = input.lines().next().map_or(0, str::len) as i32;

        let mut obstacles = HashSet::new();
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
                    _ => {}
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            obstacles,
            start: start.ok_or_else(|| miette!("no guard start position in input"))?,
        })
    }

    fn contains(&self, position: Position) -> bool {
        (0..self.cols).contains(&position.x) && (0..self.rows).contains(&position.y)
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let map = Map::parse(input)?;

    let mut visited = HashSet::from([map.start]);
    let mut position = map.start;
    let mut direction = Direction::North;

    loop {
        let next = direction.step(position);
        if !map.contains(next) {
            break;
        }
        if map.obstacles.contains(&next) {
            direction = direction.turn_right();
        } else {
            position = next;
            visited.insert(position);
        }
    }

    Ok(visited.len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() -> Result<()> {
        let input = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";
        assert_eq!("41", process(input)?);
        Ok(())
    }

    #[test]
    fn test_parse_map() -> Result<()> {
        let map = Map::parse(".#.\n.^.")?;
        assert_eq!(3, map.cols);
        assert_eq!(2, map.rows);
        assert_eq!(Position { x: 1, y: 1 }, map.start);
        assert!(map.obstacles.contains(&Position { x: 1, y: 0 }));
        Ok(())
    }

    #[test]
    fn test_missing_guard() {
        assert!(Map::parse("...\n.#.").is_err());
    }

    #[test]
    fn test_walks_straight_off_grid() -> Result<()> {
        // no obstacles: three cells straight up, start included
        assert_eq!("3", process("...\n...\n.^.")?);
        Ok(())
    }
}
