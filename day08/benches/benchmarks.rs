use day08::*;

fn main() {
    divan::main();
}

const SAMPLE: &str = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(SAMPLE)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(SAMPLE)).unwrap();
}
