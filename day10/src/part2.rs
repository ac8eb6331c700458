use std::collections::HashMap;

use miette::{miette, Result};
use petgraph::graph::{DiGraph, NodeIndex};

const TRAILHEAD: u8 = 0;
const PEAK: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    x: usize,
    y: usize,
    height: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Heightmap {
    grid: Vec<Vec<u8>>,
    cols: usize,
    rows: usize,
}

fn parse_input(input: &str) -> Result<Heightmap> {
    let cols = input
        .lines()
        .next()
        .ok_or_else(|| miette!("input is empty"))?
        .len();
    let rows = input.lines().count();

    if input.lines().any(|line| line.len() != cols) {
        return Err(miette!("height grid is not rectangular"));
    }

    let grid = input
        .lines()
        .map(|line| {
            line.chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|d| d as u8)
                        .ok_or_else(|| miette!("invalid height character {c:?}"))
                })
                .collect::<Result<Vec<u8>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Heightmap { grid, cols, rows })
}

fn create_graph(map: &Heightmap) -> DiGraph<Cell, ()> {
    let mut graph = DiGraph::new();
    let mut indices = HashMap::new();

    for y in 0..map.rows {
        for x in 0..map.cols {
            let idx = graph.add_node(Cell {
                x,
                y,
                height: map.grid[y][x],
            });
            indices.insert((x, y), idx);
        }
    }

    let deltas = [(0, -1), (0, 1), (-1, 0), (1, 0)];
    for y in 0..map.rows {
        for x in 0..map.cols {
            for (dx, dy) in deltas {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx < 0 || ny < 0 || nx >= map.cols as i32 || ny >= map.rows as i32 {
                    continue;
                }

                if map.grid[ny as usize][nx as usize] == map.grid[y][x] + 1 {
                    graph.add_edge(
                        indices[&(x, y)],
                        indices[&(nx as usize, ny as usize)],
                        (),
                    );
                }
            }
        }
    }

    graph
}

/// Counts distinct trails from a trailhead. Edges only ever climb, so the
/// graph is acyclic and walking without a visited set enumerates paths.
fn trailhead_rating(graph: &DiGraph<Cell, ()>, start: NodeIndex) -> usize {
    let mut stack = vec![start];
    let mut trails = 0;

    while let Some(current) = stack.pop() {
        if graph[current].height == PEAK {
            trails += 1;
            continue;
        }
        stack.extend(graph.neighbors(current));
    }

    trails
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let map = parse_input(input)?;
    let graph = create_graph(&map);

    let total: usize = graph
        .node_indices()
        .filter(|&idx| graph[idx].height == TRAILHEAD)
        .map(|start| trailhead_rating(&graph, start))
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() -> Result<()> {
        let input = "89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";
        assert_eq!("81", process(input)?);
        Ok(())
    }

    #[test]
    fn test_single_trail_rating() -> Result<()> {
        assert_eq!("1", process("0123456789")?);
        Ok(())
    }

    #[test]
    fn test_forked_trail_rating() -> Result<()> {
        // each 0 can stay in its row or cross over mid-way, two trails apiece
        let input = "0123456789
9876543210";
        assert_eq!("4", process(input)?);
        Ok(())
    }
}
