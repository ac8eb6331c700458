use {{crate_name}}::*;

fn main() {
    divan::main();
}

const SAMPLE: &str = "";

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(SAMPLE)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(SAMPLE)).unwrap();
}
