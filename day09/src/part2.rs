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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileSpan {
    id: usize,
    offset: usize,
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gap {
    offset: usize,
    len: usize,
}

/// Span-level view of the disk: whole files and the gaps between them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DiskMap {
    files: Vec<FileSpan>,
    gaps: Vec<Gap>,
}

impl DiskMap {
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

        let mut files = Vec::new();
        let mut gaps = Vec::new();
        let mut offset = 0;

        for (i, c) in input.chars().enumerate() {
            let len = c
                .to_digit(10)
                .ok_or_else(|| miette!("digit out of range"))? as usize;
            if i % 2 == 0 {
                files.push(FileSpan {
                    id: i / 2,
                    offset,
                    len,
                });
            } else {
                gaps.push(Gap { offset, len });
            }
            offset += len;
        }

        Ok(Self { files, gaps })
    }

    /// Moves each whole file once, in decreasing id order, into the first
    /// gap that fits entirely left of the file.
    fn defrag(&mut self) {
        for file in self.files.iter_mut().rev() {
            let candidate = self
                .gaps
                .iter()
                .take_while(|gap| gap.offset < file.offset)
                .position(|gap| gap.len >= file.len);

            if let Some(i) = candidate {
                file.offset = self.gaps[i].offset;
                if self.gaps[i].len == file.len {
                    self.gaps.remove(i);
                } else {
                    self.gaps[i].offset += file.len;
                    self.gaps[i].len -= file.len;
                }
            }
        }
    }

    fn checksum(&self) -> u64 {
        self.files
            .iter()
            .map(|file| {
                (file.offset..file.offset + file.len)
                    .map(|position| position as u64 * file.id as u64)
                    .sum::<u64>()
            })
            .sum()
    }
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let mut disk = DiskMap::parse(input)?;
    disk.defrag();
    Ok(disk.checksum().to_string())
}
