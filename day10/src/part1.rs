use std::collections::{HashMap, HashSet};

use miette::{miette, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

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

/// Builds a directed graph with an edge wherever the height climbs by
/// exactly one between 4-adjacent cells.
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

/// Counts the distinct peaks reachable from a trailhead.
fn trailhead_score(graph: &DiGraph<Cell, ()>, start: NodeIndex) -> usize {
    let mut visited = HashSet::from([start]);
    let mut stack = vec![start];
    let mut peaks = 0;

    while let Some(current) = stack.pop() {
        if graph[current].height == PEAK {
            peaks += 1;
        }
        for neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    peaks
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let map = parse_input(input)?;
    let graph = create_graph(&map);
    debug!(
        "graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let total: usize = graph
        .node_indices()
        .filter(|&idx| graph[idx].height == TRAILHEAD)
        .map(|start| trailhead_score(&graph, start))
        .sum();

    Ok(total.to_string())
}
