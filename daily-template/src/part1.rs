use miette::Result;

#[tracing::instrument]
pub fn process(_input: &str) -> Result<String> {
    todo!("part 1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() -> Result<()> {
        let input = "";
        assert_eq!("", process(input)?);
        Ok(())
    }
}
