use miette::{miette, Context, IntoDiagnostic};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| miette!("usage: day08 <input-file>"))?;
    let input = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read input file `{path}`"))?;

    println!("Part 1: {}", day08::part1::process(&input).context("process part 1")?);
    println!("Part 2: {}", day08::part2::process(&input).context("process part 2")?);
    Ok(())
}
