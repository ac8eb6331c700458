use std::collections::{HashMap, HashSet};

use glam::IVec2;
use itertools::Itertools;
use miette::{miette, Result};

const EMPTY: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
struct Map {
    dims: IVec2,
    antennas: HashMap<char, Vec<IVec2>>,
}

impl Map {
    fn parse(input: &str) -> Result<Self> {
        let rows = input.lines().count();
        let cols = input.lines().next().map_or(0, str::len);
        if rows == 0 || cols == 0 {
            return Err(miette!("empty antenna map"));
        }

        let mut antennas: HashMap<char, Vec<IVec2>> = HashMap::new();
        for (y, line) in input.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                if c != EMPTY {
                    antennas
                        .entry(c)
                        .or_default()
                        .push(IVec2::new(x as i32, y as i32));
                }
            }
        }

        Ok(Self {
            dims: IVec2::new(cols as i32, rows as i32),
            antennas,
        })
    }

    fn contains(&self, point: IVec2) -> bool {
        point.cmpge(IVec2::ZERO).all() && point.cmplt(self.dims).all()
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let map = Map::parse(input)?;
    let mut antinodes: HashSet<IVec2> = HashSet::new();

    // every in-bounds point on a pair's line is an antinode, antennas included
    for positions in map.antennas.values() {
        for (a, b) in positions.iter().tuple_combinations() {
            let delta = *b - *a;

            let mut point = *a;
            while map.contains(point) {
                antinodes.insert(point);
                point += delta;
            }

            let mut point = *a;
            while map.contains(point) {
                antinodes.insert(point);
                point -= delta;
            }
        }
    }

    Ok(antinodes.len().to_string())
}
