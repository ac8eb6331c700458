use miette::{miette, Diagnostic, Result, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
#[error("disk map contains a non-digit character")]
#[diagnostic(
    code(day09::invalid_digit),
    help("the disk map is a single line of digits 0-9")
)]
struct InvalidDigitError {
    #[source_code]
    src: String,
    #[label("not a digit")]
    span: SourceSpan,
}

/// Block-level view of the disk: `Some(id)` is a block of file `id`,
/// `None` is free space.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Disk {
    blocks: Vec<Option<usize>>,
}

impl Disk {
    fn parse(input: &str) -> Result<Self> {
        let input = input.trim_end();
        if input.is_empty() {
            return Err(miette!("empty disk map"));
        }
        if let Some((pos, _)) = input.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(InvalidDigitError {
                src: input.to_string(),
                span: (pos, 1).into(),
            }
            .into());
        }

        let mut blocks = Vec::new();
        for (i, c) in input.chars().enumerate() {
            let size = c
                .to_digit(10)
                .ok_or_else(|| miette!("digit out of range"))? as usize;
            let id = (i % 2 == 0).then_some(i / 2);
            blocks.extend(std::iter::repeat(id).take(size));
        }

        Ok(Self { blocks })
    }

    /// Moves blocks from the tail into the leftmost gaps until no gap
    /// precedes a block.
    fn compact(&mut self) {
        if self.blocks.is_empty() {
            return;
        }

        let mut left = 0;
        let mut right = self.blocks.len() - 1;

        while left < right {
            while left < right && self.blocks[left].is_some() {
                left += 1;
            }
            while left < right && self.blocks[right].is_none() {
                right -= 1;
            }
            if left < right {
                self.blocks.swap(left, right);
            }
        }
    }

    fn checksum(&self) -> u64 {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(position, block)| block.map(|id| position as u64 * id as u64))
            .sum()
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for block in &self.blocks {
            match block {
                Some(id) => write!(f, "{id}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let mut disk = Disk::parse(input)?;
    disk.compact();
    Ok(disk.checksum().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_process() -> Result<()> {
        let input = "2333133121414131402";
        assert_eq!("1928", process(input)?);
        Ok(())
    }

    #[test_log::test]
    fn test_process_small() -> Result<()> {
        let input = "12345";
        assert_eq!("60", process(input)?);
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let disk = Disk::parse("12345")?;
        assert_eq!("0..111....22222", disk.to_string());
        Ok(())
    }

    #[test]
    fn test_compact_small() -> Result<()> {
        let mut disk = Disk::parse("12345")?;
        disk.compact();
        assert_eq!("022111222......", disk.to_string());
        Ok(())
    }

    #[test]
    fn test_rejects_non_digit() {
        assert!(Disk::parse("123A45").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Disk::parse("").is_err());
        assert!(Disk::parse("\n").is_err());
    }
}
