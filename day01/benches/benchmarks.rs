use day01::*;

fn main() {
    divan::main();
}

const SAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3";

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(SAMPLE)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(SAMPLE)).unwrap();
}
