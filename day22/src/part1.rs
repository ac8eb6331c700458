use miette::{Diagnostic, Result};
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PuzzleError {
    #[error("failed to parse initial secret")]
    #[diagnostic(code(day22::parse_error))]
    Parse(#[from] std::num::ParseIntError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Secret(u64);

impl Secret {
    const MODULUS: u64 = 16_777_216; // 2^24

    #[inline]
    fn mix(&mut self, value: u64) {
        self.0 ^= value;
    }

    #[inline]
    fn prune(&mut self) {
        self.0 %= Self::MODULUS;
    }

    /// One evolution: multiply by 64, divide by 32, multiply by 2048,
    /// mixing and pruning after each step.
    fn evolve(&mut self) {
        let product = self.0 << 6;
        self.mix(product);
        self.prune();

        let quotient = self.0 >> 5;
        self.mix(quotient);
        self.prune();

        let product = self.0 << 11;
        self.mix(product);
        self.prune();
    }
}

#[tracing::instrument(skip_all)]
pub fn process(input: &str) -> Result<String, PuzzleError> {
    let buyers = input
        .lines()
        .map(|line| line.parse().map_err(PuzzleError::Parse))
        .collect::<Result<Vec<u64>, _>>()?;

    let total: u64 = buyers
        .par_iter()
        .map(|&initial| {
            let mut secret = Secret(initial);
            for _ in 0..2000 {
                secret.evolve();
            }
            secret.0
        })
        .sum();

    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_and_prune() {
        let mut secret = Secret(42);
        secret.mix(15);
        assert_eq!(37, secret.0);

        let mut secret = Secret(100_000_000);
        secret.prune();
        assert_eq!(16_113_920, secret.0);
    }

    #[test]
    fn test_evolution_sequence() {
        let expected = [
            15887950, 16495136, 527345, 704524, 1553684, 12683156, 11100544,
            12249484, 7753432, 5908254,
        ];

        let mut secret = Secret(123);
        for value in expected {
            secret.evolve();
            assert_eq!(value, secret.0);
        }
    }

    #[test]
    fn test_process() -> Result<(), PuzzleError> {
        let input = "1
10
100
2024";
        assert_eq!("37327623", process(input)?);
        Ok(())
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(process("1\nx\n3").is_err());
    }
}
