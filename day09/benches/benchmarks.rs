use day09::*;

fn main() {
    divan::main();
}

const SAMPLE: &str = "2333133121414131402";

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(SAMPLE)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(SAMPLE)).unwrap();
}
